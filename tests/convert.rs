//! Convert path: schema walks, degradation on odd lengths, involution.

use esmconv::convert::{apply_schema, convert_subrecord};
use esmconv::schema::SchemaRegistry;
use esmconv::{convert, convert_in_place, FieldType, Signature, SubrecordField, SubrecordSchema};

fn floats_be(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

fn floats_le(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn placed_reference() {
    assert_eq!(convert("NAME", "REFR", &[0x00, 0x01, 0x23, 0x45]).expect("NAME"), [0x45, 0x23, 0x01, 0x00]);
    let pos = [1.0, 2.0, 3.0, 0.0, 0.5, -1.5];
    assert_eq!(convert("DATA", "ACHR", &floats_be(&pos)).expect("DATA"), floats_le(&pos));
}

#[test]
fn no_schema_leaves_buffer_alone() {
    assert_eq!(convert("QQQQ", "ZZZZ", &[1, 2, 3]), None);
    let mut buf = vec![1, 2, 3];
    assert!(!convert_in_place("QQQQ", "ZZZZ", &mut buf));
    assert_eq!(buf, [1, 2, 3]);
    assert!(!convert_in_place("TOO_LONG", "REFR", &mut buf));
}

#[test]
fn strings_pass_through() {
    let text = b"WeapNVHuntingRifle\0".to_vec();
    assert_eq!(convert("EDID", "WEAP", &text).expect("EDID"), text);
    assert_eq!(convert("FULL", "NPC_", b"").expect("FULL"), b"");
}

#[test]
fn short_buffer_stops_early() {
    // XCLC wants X, Y, flags; only X and half of Y are present.
    let pc = convert("XCLC", "CELL", &[0, 0, 0, 7, 0xFF, 0xFF]).expect("XCLC");
    assert_eq!(pc, [7, 0, 0, 0, 0xFF, 0xFF]);
}

#[test]
fn long_buffer_keeps_tail() {
    let pc = convert("NAME", "REFR", &[0, 0, 0, 1, 9, 8]).expect("NAME");
    assert_eq!(pc, [1, 0, 0, 0, 9, 8]);
}

#[test]
fn repeating_whole_elements() {
    let values = [0.25f32, -4.0, 100.0, 7.5];
    assert_eq!(convert("FGGS", "NPC_", &floats_be(&values)).expect("FGGS"), floats_le(&values));
}

#[test]
fn repeating_single_field_odd_length_unchanged() {
    let console = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    assert_eq!(convert("FGGS", "NPC_", &console).expect("FGGS"), console);
}

#[test]
fn repeating_multi_field_partial_tail() {
    // SCOL DATA: PosRot + scale, 28 bytes per placement.
    let element = [1.0f32, 2.0, 3.0, 0.1, 0.2, 0.3, 1.5];
    let mut console = floats_be(&element);
    console.extend(0x11223344u32.to_be_bytes());
    let pc = convert("DATA", "SCOL", &console).expect("SCOL");
    assert_eq!(&pc[..28], floats_le(&element).as_slice());
    assert_eq!(&pc[28..], &0x11223344u32.to_be_bytes());
}

#[test]
fn generic_data_bytes() {
    for len in [0usize, 1, 2, 3, 65, 68] {
        let console: Vec<u8> = (0..len).map(|i| i as u8).collect();
        assert_eq!(convert("DATA", "ZZZZ", &console).expect("DATA"), console, "len {len}");
    }
    for len in [4usize, 64] {
        let console: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let expected: Vec<u8> = console.chunks(4).flat_map(|w| w.iter().rev().copied()).collect();
        assert_eq!(convert("DATA", "ZZZZ", &console).expect("DATA"), expected, "len {len}");
    }
}

#[test]
fn shrinking_overrides_in_place() {
    let mut buf = vec![1, 2, 3, 4, 0];
    assert!(convert_in_place("DATA", "PERK", &mut buf));
    assert_eq!(buf, [1, 2, 3, 4]);
}

#[test]
fn symmetric_types_are_involutions() {
    let cases: [(&str, &str, Vec<u8>); 5] = [
        ("XCLC", "CELL", (0u8..12).collect()),
        ("DATA", "REFR", (0u8..24).collect()),
        ("SNDD", "SOUN", (0u8..36).collect()),
        ("NVVX", "NAVM", (0u8..36).collect()),
        ("NVDP", "NAVM", (0u8..16).collect()),
    ];
    for (sig, rt, console) in cases {
        let once = convert(sig, rt, &console).expect("schema");
        let twice = convert(sig, rt, &once).expect("schema");
        assert_eq!(twice, console, "{sig} in {rt}");
    }
}

#[test]
fn private_registry() {
    let mut reg = SchemaRegistry::new();
    let tag = |s: &str| Signature::parse(s).expect("tag");
    reg.register(
        esmconv::SchemaKey::new(tag("TEST")).with_len(6),
        SubrecordSchema::fixed(vec![
            SubrecordField::new("A", FieldType::UInt16),
            SubrecordField::new("B", FieldType::ColorArgb),
        ]),
    );
    let mut buf = vec![0x12, 0x34, 0xFF, 1, 2, 3];
    assert!(convert_subrecord(&reg, tag("TEST"), tag("ANY_"), &mut buf));
    assert_eq!(buf, [0x34, 0x12, 1, 2, 3, 0xFF]);
    let mut other = vec![0x12, 0x34];
    assert!(!convert_subrecord(&reg, tag("TEST"), tag("ANY_"), &mut other));
}

#[test]
fn apply_schema_variable_mode() {
    let schema = SubrecordSchema::variable(vec![SubrecordField::new("Id", FieldType::FormId)]);
    let mut buf = [0, 0, 0, 9, 0xAB];
    apply_schema(&schema, &mut buf);
    assert_eq!(buf, [9, 0, 0, 0, 0xAB]);
}
