//! Field type model: sizes, console→PC transforms, decode in both byte orders.

use esmconv::{Endianness, FieldType, Rgba, SubrecordField, Value};

fn converted(ty: FieldType, bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    ty.convert(&mut out);
    out
}

#[test]
fn default_sizes() {
    assert_eq!(FieldType::UInt8.default_size(), Some(1));
    assert_eq!(FieldType::Int16.default_size(), Some(2));
    assert_eq!(FieldType::UInt16LittleEndian.default_size(), Some(2));
    assert_eq!(FieldType::FormIdLittleEndian.default_size(), Some(4));
    assert_eq!(FieldType::UInt32WordSwapped.default_size(), Some(4));
    assert_eq!(FieldType::ColorArgb.default_size(), Some(4));
    assert_eq!(FieldType::Double.default_size(), Some(8));
    assert_eq!(FieldType::Vec3.default_size(), Some(12));
    assert_eq!(FieldType::Quaternion.default_size(), Some(16));
    assert_eq!(FieldType::PosRot.default_size(), Some(24));
    assert_eq!(FieldType::String.default_size(), None);
    assert_eq!(FieldType::ByteArray.default_size(), None);
    assert_eq!(SubrecordField::padding(3).size(), Some(3));
    assert_eq!(SubrecordField::sized("Deltas", FieldType::ByteArray, 1089).size(), Some(1089));
}

#[test]
fn scalar_swaps() {
    assert_eq!(converted(FieldType::UInt16, &[0x12, 0x34]), [0x34, 0x12]);
    assert_eq!(converted(FieldType::FormId, &[0, 1, 2, 3]), [3, 2, 1, 0]);
    assert_eq!(converted(FieldType::Float, &[0x3F, 0x80, 0, 0]), [0, 0, 0x80, 0x3F]);
    assert_eq!(converted(FieldType::UInt64, &[1, 2, 3, 4, 5, 6, 7, 8]), [8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn platform_neutral_types_untouched() {
    for ty in [
        FieldType::UInt8,
        FieldType::Int8,
        FieldType::UInt16LittleEndian,
        FieldType::FormIdLittleEndian,
        FieldType::ColorRgba,
        FieldType::String,
        FieldType::ByteArray,
        FieldType::Padding,
    ] {
        assert!(!ty.needs_conversion(), "{ty:?}");
        assert_eq!(converted(ty, &[1, 2, 3, 4]), [1, 2, 3, 4], "{ty:?}");
    }
}

#[test]
fn vector_types_swap_each_float() {
    let be: Vec<u8> = [1.0f32, -2.0, 0.5].iter().flat_map(|v| v.to_be_bytes()).collect();
    let le: Vec<u8> = [1.0f32, -2.0, 0.5].iter().flat_map(|v| v.to_le_bytes()).collect();
    assert_eq!(converted(FieldType::Vec3, &be), le);

    let be: Vec<u8> = (0..6).flat_map(|i| (i as f32).to_be_bytes()).collect();
    let le: Vec<u8> = (0..6).flat_map(|i| (i as f32).to_le_bytes()).collect();
    assert_eq!(converted(FieldType::PosRot, &be), le);
}

#[test]
fn converting_twice_restores_bytes() {
    let types = [
        FieldType::UInt8,
        FieldType::Int8,
        FieldType::UInt16,
        FieldType::Int16,
        FieldType::UInt16LittleEndian,
        FieldType::UInt32,
        FieldType::Int32,
        FieldType::Float,
        FieldType::FormId,
        FieldType::FormIdLittleEndian,
        FieldType::UInt32WordSwapped,
        FieldType::UInt64,
        FieldType::Int64,
        FieldType::Double,
        FieldType::Vec3,
        FieldType::Quaternion,
        FieldType::PosRot,
        FieldType::ColorRgba,
        FieldType::String,
        FieldType::ByteArray,
        FieldType::Padding,
    ];
    for ty in types {
        let size = ty.default_size().unwrap_or(7);
        let original: Vec<u8> = (1..=size).map(|i| (i * 17) as u8).collect();
        let once = converted(ty, &original);
        assert_eq!(converted(ty, &once), original, "{ty:?}");
    }
}

#[test]
fn word_swapped_u32() {
    // 0x56781234 on console: low word 0x1234 first, each word big-endian.
    let console = [0x12, 0x34, 0x56, 0x78];
    let pc = converted(FieldType::UInt32WordSwapped, &console);
    assert_eq!(pc, 0x5678_1234u32.to_le_bytes());
    assert_eq!(
        FieldType::UInt32WordSwapped.decode(&console, Endianness::Big),
        Some(Value::U32(0x5678_1234))
    );
    assert_eq!(
        FieldType::UInt32WordSwapped.decode(&pc, Endianness::Little),
        Some(Value::U32(0x5678_1234))
    );
}

#[test]
fn argb_becomes_rgba() {
    assert_eq!(converted(FieldType::ColorArgb, &[0xFF, 0x10, 0x20, 0x30]), [0x10, 0x20, 0x30, 0xFF]);
    let expected = Value::Color(Rgba { r: 0x10, g: 0x20, b: 0x30, a: 0xFF });
    assert_eq!(FieldType::ColorArgb.decode(&[0xFF, 0x10, 0x20, 0x30], Endianness::Big), Some(expected.clone()));
    assert_eq!(FieldType::ColorArgb.decode(&[0x10, 0x20, 0x30, 0xFF], Endianness::Little), Some(expected));
}

#[test]
fn numeric_decode_both_orders() {
    let be = 0xDEAD_BEEFu32.to_be_bytes();
    let le = 0xDEAD_BEEFu32.to_le_bytes();
    assert_eq!(FieldType::FormId.decode(&be, Endianness::Big), Some(Value::FormId(0xDEAD_BEEF)));
    assert_eq!(FieldType::FormId.decode(&le, Endianness::Little), Some(Value::FormId(0xDEAD_BEEF)));
    assert_eq!(FieldType::Int16.decode(&[0xFF, 0xFE], Endianness::Big), Some(Value::I16(-2)));
    assert_eq!(FieldType::Int8.decode(&[0x80], Endianness::Big), Some(Value::I8(-128)));
    // Little-endian-on-both types ignore the requested order.
    assert_eq!(FieldType::UInt16LittleEndian.decode(&[0x34, 0x12], Endianness::Big), Some(Value::U16(0x1234)));
    assert_eq!(FieldType::FormIdLittleEndian.decode(&le, Endianness::Big), Some(Value::FormId(0xDEAD_BEEF)));
    assert_eq!(
        FieldType::Double.decode(&1.5f64.to_be_bytes(), Endianness::Big),
        Some(Value::Double(1.5))
    );
}

#[test]
fn decode_short_and_padding() {
    assert_eq!(FieldType::UInt32.decode(&[1, 2, 3], Endianness::Big), None);
    assert_eq!(FieldType::Vec3.decode(&[0; 11], Endianness::Little), None);
    assert_eq!(FieldType::Padding.decode(&[0; 4], Endianness::Little), None);
}

#[test]
fn string_stops_at_first_nul() {
    let v = FieldType::String.decode(&[0x48, 0x49, 0x00, 0x99, 0x99], Endianness::Big);
    assert_eq!(v, Some(Value::String("HI".into())));
    // Single-byte game encoding, not UTF-8.
    let v = FieldType::String.decode(&[b'C', b'a', b'f', 0xE9, 0x00], Endianness::Little);
    assert_eq!(v.as_ref().and_then(Value::as_str), Some("Café"));
    let v = FieldType::String.decode(b"NoTerminator", Endianness::Little);
    assert_eq!(v.as_ref().and_then(Value::as_str), Some("NoTerminator"));
}

#[test]
fn endianness_from_flag() {
    assert_eq!(Endianness::from(true), Endianness::Big);
    assert_eq!(Endianness::from(false), Endianness::Little);
}

#[test]
fn value_accessors() {
    assert_eq!(Value::U16(7).as_u64(), Some(7));
    assert_eq!(Value::I8(-3).as_i64(), Some(-3));
    assert_eq!(Value::FormId(0x14).as_form_id(), Some(0x14));
    assert_eq!(Value::Vec3([1.0, 2.0, 3.0]).as_floats(), Some(&[1.0f32, 2.0, 3.0][..]));
    assert_eq!(Value::Bytes(vec![1, 2]).as_bytes(), Some(&[1u8, 2][..]));
    assert_eq!(Value::Float(1.0).as_str(), None);
    assert_eq!(Value::FormId(0x14).to_string(), "00000014");
}
