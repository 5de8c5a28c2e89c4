//! Field type model: storage size, console→PC transform and endian-aware decode.
//!
//! Every subrecord schema is a list of [`SubrecordField`]s. The field type decides
//! how many bytes a field occupies and what happens to those bytes on each path:
//!
//! | Type | Size | Convert transform |
//! |------|------|-------------------|
//! | `UInt8` / `Int8` | 1 | none |
//! | `UInt16` / `Int16` | 2 | swap 2 bytes |
//! | `UInt16LittleEndian` | 2 | none |
//! | `UInt32` / `Int32` / `Float` / `FormId` | 4 | swap 4 bytes |
//! | `FormIdLittleEndian` | 4 | none |
//! | `UInt32WordSwapped` | 4 | swap each 16-bit half |
//! | `UInt64` / `Int64` / `Double` | 8 | swap 8 bytes |
//! | `Vec3` / `Quaternion` / `PosRot` | 12 / 16 / 24 | swap each float |
//! | `ColorRgba` | 4 | none |
//! | `ColorArgb` | 4 | A,R,G,B → R,G,B,A |
//! | `String` / `ByteArray` | variable | none |
//! | `Padding` | n | none |

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::value::{Rgba, Value};

/// Byte order of a payload handed to the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Console encoding.
    Big,
    /// PC encoding.
    Little,
}

impl From<bool> for Endianness {
    /// `true` means the buffer is big-endian.
    fn from(is_big_endian: bool) -> Self {
        if is_big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    /// Stored little-endian on both platforms.
    UInt16LittleEndian,
    UInt32,
    Int32,
    Float,
    FormId,
    /// Stored little-endian on both platforms.
    FormIdLittleEndian,
    /// Two big-endian 16-bit words, low word first.
    UInt32WordSwapped,
    UInt64,
    Int64,
    Double,
    Vec3,
    Quaternion,
    PosRot,
    ColorRgba,
    /// Console stores A,R,G,B; PC stores R,G,B,A.
    ColorArgb,
    /// NUL-terminated single-byte text.
    String,
    ByteArray,
    Padding,
}

impl FieldType {
    /// Storage size, or `None` for types that take whatever is left of the buffer
    /// unless the field carries an explicit size.
    pub const fn default_size(self) -> Option<usize> {
        match self {
            FieldType::UInt8 | FieldType::Int8 => Some(1),
            FieldType::UInt16 | FieldType::Int16 | FieldType::UInt16LittleEndian => Some(2),
            FieldType::UInt32
            | FieldType::Int32
            | FieldType::Float
            | FieldType::FormId
            | FieldType::FormIdLittleEndian
            | FieldType::UInt32WordSwapped
            | FieldType::ColorRgba
            | FieldType::ColorArgb => Some(4),
            FieldType::UInt64 | FieldType::Int64 | FieldType::Double => Some(8),
            FieldType::Vec3 => Some(12),
            FieldType::Quaternion => Some(16),
            FieldType::PosRot => Some(24),
            FieldType::String | FieldType::ByteArray | FieldType::Padding => None,
        }
    }

    /// True when the type's storage differs between platforms.
    pub const fn needs_conversion(self) -> bool {
        !matches!(
            self,
            FieldType::UInt8
                | FieldType::Int8
                | FieldType::UInt16LittleEndian
                | FieldType::FormIdLittleEndian
                | FieldType::ColorRgba
                | FieldType::String
                | FieldType::ByteArray
                | FieldType::Padding
        )
    }

    /// Apply the console→PC transform to exactly one field's bytes.
    ///
    /// `bytes` must be the field's extent; anything shorter than the type's size is
    /// left alone.
    pub fn convert(self, bytes: &mut [u8]) {
        match self {
            FieldType::UInt16 | FieldType::Int16 => swap_words(bytes, 2),
            FieldType::UInt32 | FieldType::Int32 | FieldType::Float | FieldType::FormId => {
                swap_words(bytes, 4)
            }
            FieldType::UInt64 | FieldType::Int64 | FieldType::Double => swap_words(bytes, 8),
            FieldType::Vec3 | FieldType::Quaternion | FieldType::PosRot => swap_words(bytes, 4),
            FieldType::UInt32WordSwapped => {
                if bytes.len() >= 4 {
                    bytes.swap(0, 1);
                    bytes.swap(2, 3);
                }
            }
            FieldType::ColorArgb => {
                if bytes.len() >= 4 {
                    bytes[..4].rotate_left(1);
                }
            }
            FieldType::UInt8
            | FieldType::Int8
            | FieldType::UInt16LittleEndian
            | FieldType::FormIdLittleEndian
            | FieldType::ColorRgba
            | FieldType::String
            | FieldType::ByteArray
            | FieldType::Padding => {}
        }
    }

    /// Decode one field's bytes in the given byte order. Returns `None` if the
    /// slice is too short or the type carries no value (padding).
    pub fn decode(self, bytes: &[u8], endianness: Endianness) -> Option<Value> {
        if let Some(size) = self.default_size() {
            if bytes.len() < size {
                return None;
            }
        }
        let big = endianness == Endianness::Big;
        let v = match self {
            FieldType::UInt8 => Value::U8(bytes[0]),
            FieldType::Int8 => Value::I8(bytes[0] as i8),
            FieldType::UInt16 => Value::U16(if big {
                BigEndian::read_u16(bytes)
            } else {
                LittleEndian::read_u16(bytes)
            }),
            FieldType::Int16 => Value::I16(if big {
                BigEndian::read_i16(bytes)
            } else {
                LittleEndian::read_i16(bytes)
            }),
            FieldType::UInt16LittleEndian => Value::U16(LittleEndian::read_u16(bytes)),
            FieldType::UInt32 => Value::U32(read_u32(bytes, endianness)),
            FieldType::Int32 => Value::I32(if big {
                BigEndian::read_i32(bytes)
            } else {
                LittleEndian::read_i32(bytes)
            }),
            FieldType::Float => Value::Float(read_f32(bytes, endianness)),
            FieldType::FormId => Value::FormId(read_u32(bytes, endianness)),
            FieldType::FormIdLittleEndian => Value::FormId(LittleEndian::read_u32(bytes)),
            FieldType::UInt32WordSwapped => Value::U32(if big {
                let lo = BigEndian::read_u16(bytes) as u32;
                let hi = BigEndian::read_u16(&bytes[2..]) as u32;
                lo | (hi << 16)
            } else {
                LittleEndian::read_u32(bytes)
            }),
            FieldType::UInt64 => Value::U64(if big {
                BigEndian::read_u64(bytes)
            } else {
                LittleEndian::read_u64(bytes)
            }),
            FieldType::Int64 => Value::I64(if big {
                BigEndian::read_i64(bytes)
            } else {
                LittleEndian::read_i64(bytes)
            }),
            FieldType::Double => Value::Double(if big {
                BigEndian::read_f64(bytes)
            } else {
                LittleEndian::read_f64(bytes)
            }),
            FieldType::Vec3 => Value::Vec3(read_floats::<3>(bytes, endianness)),
            FieldType::Quaternion => Value::Quaternion(read_floats::<4>(bytes, endianness)),
            FieldType::PosRot => Value::PosRot(read_floats::<6>(bytes, endianness)),
            FieldType::ColorRgba => Value::Color(Rgba {
                r: bytes[0],
                g: bytes[1],
                b: bytes[2],
                a: bytes[3],
            }),
            FieldType::ColorArgb => Value::Color(if big {
                Rgba {
                    a: bytes[0],
                    r: bytes[1],
                    g: bytes[2],
                    b: bytes[3],
                }
            } else {
                Rgba {
                    r: bytes[0],
                    g: bytes[1],
                    b: bytes[2],
                    a: bytes[3],
                }
            }),
            FieldType::String => Value::String(decode_zstring(bytes)),
            FieldType::ByteArray => Value::Bytes(bytes.to_vec()),
            FieldType::Padding => return None,
        };
        Some(v)
    }
}

/// One named, typed slot in a subrecord layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubrecordField {
    /// Empty for anonymous slots (padding); such fields are never reported by the read path.
    pub name: &'static str,
    pub ty: FieldType,
    /// Explicit size override. Falls back to [`FieldType::default_size`].
    pub size: Option<usize>,
}

impl SubrecordField {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        SubrecordField { name, ty, size: None }
    }

    pub const fn sized(name: &'static str, ty: FieldType, size: usize) -> Self {
        SubrecordField { name, ty, size: Some(size) }
    }

    pub const fn padding(size: usize) -> Self {
        SubrecordField { name: "", ty: FieldType::Padding, size: Some(size) }
    }

    /// Resolved storage size; `None` means "rest of the buffer".
    pub const fn size(&self) -> Option<usize> {
        match self.size {
            Some(n) => Some(n),
            None => self.ty.default_size(),
        }
    }

    /// Bytes this field would occupy with `remaining` bytes left.
    pub fn extent(&self, remaining: usize) -> usize {
        self.size().unwrap_or(remaining)
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

fn swap_words(bytes: &mut [u8], width: usize) {
    for word in bytes.chunks_exact_mut(width) {
        word.reverse();
    }
}

fn read_u32(bytes: &[u8], endianness: Endianness) -> u32 {
    match endianness {
        Endianness::Big => BigEndian::read_u32(bytes),
        Endianness::Little => LittleEndian::read_u32(bytes),
    }
}

fn read_f32(bytes: &[u8], endianness: Endianness) -> f32 {
    match endianness {
        Endianness::Big => BigEndian::read_f32(bytes),
        Endianness::Little => LittleEndian::read_f32(bytes),
    }
}

fn read_floats<const N: usize>(bytes: &[u8], endianness: Endianness) -> [f32; N] {
    let mut out = [0f32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = read_f32(&bytes[i * 4..], endianness);
    }
    out
}

/// Decode NUL-terminated Windows-1252 text, ignoring everything after the first NUL.
pub fn decode_zstring(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes[..end]);
    text.into_owned()
}
