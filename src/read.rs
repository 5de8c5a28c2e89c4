//! Non-mutating decode of subrecord payloads in either byte order.
//!
//! [`read_fields`] resolves a schema the same way the convert path does, minus the
//! override chain, and returns one entry per named field that could be decoded.
//! The `read_*` functions below it are fixed-layout decoders for the handful of
//! subrecords external tools read directly.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::CodecError;
use crate::field::{Endianness, SubrecordField};
use crate::schema::{registry, SchemaMode, SchemaRegistry, SubrecordSchema};
use crate::signature::Signature;
use crate::value::FieldMap;

/// Decode `payload` into an ordered name → value map. Unknown subrecords and
/// undecodable fields yield fewer (or no) entries, never an error.
///
/// Repeating layouts produce one entry per element and field, named `Field[i]`.
pub fn read_fields(
    signature: &str,
    record_type: &str,
    payload: &[u8],
    endianness: impl Into<Endianness>,
) -> FieldMap {
    let (Some(sig), Some(rt)) = (Signature::parse(signature), Signature::parse(record_type)) else {
        return FieldMap::new();
    };
    read_subrecord(registry(), sig, rt, payload, endianness.into())
}

pub fn read_subrecord(
    registry: &SchemaRegistry,
    signature: Signature,
    record_type: Signature,
    payload: &[u8],
    endianness: Endianness,
) -> FieldMap {
    match registry.resolve(signature, record_type, payload.len()) {
        Some(schema) => read_schema(schema, payload, endianness),
        None => FieldMap::new(),
    }
}

pub fn read_schema(schema: &SubrecordSchema, payload: &[u8], endianness: Endianness) -> FieldMap {
    let mut out = FieldMap::new();
    match schema.mode {
        SchemaMode::Fixed(_) | SchemaMode::Variable => {
            read_element(&schema.fields, payload, endianness, None, &mut out);
        }
        SchemaMode::Repeating => {
            let Some(element) = schema.element_size().filter(|&n| n > 0) else {
                return out;
            };
            for (i, chunk) in payload.chunks(element).enumerate() {
                read_element(&schema.fields, chunk, endianness, Some(i), &mut out);
            }
        }
    }
    out
}

fn read_element(
    fields: &[SubrecordField],
    data: &[u8],
    endianness: Endianness,
    index: Option<usize>,
    out: &mut FieldMap,
) {
    let mut pos = 0;
    for field in fields {
        let remaining = data.len() - pos;
        let extent = field.extent(remaining);
        if extent > remaining {
            break;
        }
        let bytes = &data[pos..pos + extent];
        pos += extent;
        // A rest-of-buffer field with nothing left carries no value.
        if !field.is_named() || (field.size().is_none() && bytes.is_empty()) {
            continue;
        }
        if let Some(value) = field.ty.decode(bytes, endianness) {
            let name = match index {
                Some(i) => format!("{}[{i}]", field.name),
                None => field.name.to_string(),
            };
            out.insert(name, value);
        }
    }
}

/// Terrain height samples per side of a `LAND` cell.
pub const HEIGHTMAP_SIDE: usize = 33;
pub const HEIGHTMAP_SAMPLES: usize = HEIGHTMAP_SIDE * HEIGHTMAP_SIDE;
/// Trailing padding is not required.
const VHGT_SIZE: usize = 4 + HEIGHTMAP_SAMPLES;

/// `VHGT`: base height plus row-major signed deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    pub offset: f32,
    pub deltas: Vec<i8>,
}

impl Heightmap {
    /// Absolute heights in game units (deltas accumulate along each row, rows
    /// accumulate down the first column).
    pub fn heights(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.deltas.len());
        let mut row_start = self.offset * 8.0;
        for row in self.deltas.chunks(HEIGHTMAP_SIDE) {
            let mut h = row_start;
            for (col, &d) in row.iter().enumerate() {
                h += d as f32 * 8.0;
                if col == 0 {
                    row_start = h;
                }
                out.push(h);
            }
        }
        out
    }
}

/// `XCLC`: exterior cell grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    pub x: i32,
    pub y: i32,
    /// Absent from the 8-byte form; reported as zero.
    pub flags: u32,
}

/// Placed-object `DATA`: position then rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

fn u32_at(data: &[u8], offset: usize, endianness: Endianness) -> u32 {
    match endianness {
        Endianness::Big => BigEndian::read_u32(&data[offset..]),
        Endianness::Little => LittleEndian::read_u32(&data[offset..]),
    }
}

fn f32_at(data: &[u8], offset: usize, endianness: Endianness) -> f32 {
    f32::from_bits(u32_at(data, offset, endianness))
}

pub fn read_vhgt_heightmap(
    payload: &[u8],
    endianness: impl Into<Endianness>,
) -> Result<Heightmap, CodecError> {
    CodecError::need(VHGT_SIZE, payload.len())?;
    let offset = f32_at(payload, 0, endianness.into());
    let deltas = payload[4..4 + HEIGHTMAP_SAMPLES].iter().map(|&b| b as i8).collect();
    Ok(Heightmap { offset, deltas })
}

pub fn read_xclc_cell_grid(
    payload: &[u8],
    endianness: impl Into<Endianness>,
) -> Result<CellGrid, CodecError> {
    CodecError::need(8, payload.len())?;
    let e = endianness.into();
    let flags = if payload.len() >= 12 { u32_at(payload, 8, e) } else { 0 };
    Ok(CellGrid {
        x: u32_at(payload, 0, e) as i32,
        y: u32_at(payload, 4, e) as i32,
        flags,
    })
}

pub fn read_data_position(
    payload: &[u8],
    endianness: impl Into<Endianness>,
) -> Result<Placement, CodecError> {
    CodecError::need(24, payload.len())?;
    let e = endianness.into();
    let f = |i: usize| f32_at(payload, i * 4, e);
    Ok(Placement {
        position: [f(0), f(1), f(2)],
        rotation: [f(3), f(4), f(5)],
    })
}

/// `NAME` on a placed object: the base object's FormID.
pub fn read_name_form_id(payload: &[u8], endianness: impl Into<Endianness>) -> Result<u32, CodecError> {
    CodecError::need(4, payload.len())?;
    Ok(u32_at(payload, 0, endianness.into()))
}

pub fn read_xscl_scale(payload: &[u8], endianness: impl Into<Endianness>) -> Result<f32, CodecError> {
    CodecError::need(4, payload.len())?;
    Ok(f32_at(payload, 0, endianness.into()))
}
