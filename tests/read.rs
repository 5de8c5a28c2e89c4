//! Read path: schema-driven field maps and the dedicated decoders.

use esmconv::{
    read_data_position, read_fields, read_name_form_id, read_vhgt_heightmap, read_xclc_cell_grid,
    read_xscl_scale, CodecError, Endianness, Value,
};

#[test]
fn fields_in_layout_order() {
    let mut payload = Vec::new();
    payload.extend((-3i32).to_be_bytes());
    payload.extend(12i32.to_be_bytes());
    payload.extend(1u32.to_be_bytes());
    let fields = read_fields("XCLC", "CELL", &payload, Endianness::Big);
    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["X", "Y", "ForceHideLand"]);
    assert_eq!(fields["X"], Value::I32(-3));
    assert_eq!(fields["Y"], Value::I32(12));
    assert_eq!(fields["ForceHideLand"], Value::U32(1));
}

#[test]
fn same_values_from_either_order() {
    let be = read_fields("NAME", "REFR", &0x0001_4A2Bu32.to_be_bytes(), true);
    let le = read_fields("NAME", "REFR", &0x0001_4A2Bu32.to_le_bytes(), false);
    assert_eq!(be, le);
    assert_eq!(be["Base"].as_form_id(), Some(0x0001_4A2B));
}

#[test]
fn padding_never_reported() {
    let mut payload = Vec::new();
    for v in [1u32, 25, 3] {
        payload.extend(v.to_le_bytes());
    }
    payload.extend([0x04, 0xCD, 0xCD, 0xCD]);
    let fields = read_fields("SPIT", "SPEL", &payload, Endianness::Little);
    assert_eq!(fields.len(), 4);
    assert_eq!(fields["Flags"], Value::U8(4));
    assert!(fields.keys().all(|k| !k.is_empty()));
}

#[test]
fn short_payload_reports_what_fits() {
    let fields = read_fields("XCLC", "CELL", &[0, 0, 0, 5, 0, 0], Endianness::Big);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["X"], Value::I32(5));
}

#[test]
fn strings() {
    let fields = read_fields("EDID", "NPC_", &[0x48, 0x49, 0x00, 0x99, 0x99], Endianness::Big);
    assert_eq!(fields["Value"].as_str(), Some("HI"));
}

#[test]
fn note_topic_is_a_form_id() {
    let fields = read_fields("TNAM", "NOTE", &[0x00, 0x01, 0x23, 0x45], Endianness::Big);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["Topic"], Value::FormId(0x0001_2345));
    let text = read_fields("TNAM", "NOTE", b"Go north\0", Endianness::Big);
    assert_eq!(text["Text"].as_str(), Some("Go north"));
}

#[test]
fn repeating_elements_are_indexed() {
    let payload: Vec<u8> = [1.0f32, 2.0, 3.0].iter().flat_map(|v| v.to_be_bytes()).collect();
    let fields = read_fields("FGGS", "NPC_", &payload, Endianness::Big);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["Value[0]"], Value::Float(1.0));
    assert_eq!(fields["Value[2]"], Value::Float(3.0));
}

#[test]
fn overrides_do_not_apply() {
    // The convert path truncates this form; the read path decodes all five bytes.
    let fields = read_fields("DATA", "PERK", &[1, 2, 3, 4, 0], Endianness::Big);
    assert_eq!(fields.len(), 5);
    assert_eq!(fields["Hidden"], Value::U8(0));
}

#[test]
fn unknown_is_empty() {
    assert!(read_fields("QQQQ", "ZZZZ", &[1, 2, 3, 4], Endianness::Big).is_empty());
    assert!(read_fields("NAME", "R", &[1, 2, 3, 4], Endianness::Big).is_empty());
}

#[test]
fn heightmap() {
    let mut payload = 2.0f32.to_be_bytes().to_vec();
    payload.extend(std::iter::repeat(0xFFu8).take(1089));
    payload.extend([0, 0, 0]);
    let map = read_vhgt_heightmap(&payload, Endianness::Big).expect("VHGT");
    assert_eq!(map.offset, 2.0);
    assert_eq!(map.deltas.len(), 1089);
    assert!(map.deltas.iter().all(|&d| d == -1));
    let heights = map.heights();
    assert_eq!(heights[0], 8.0);
    assert_eq!(heights[1], 0.0);
    assert_eq!(heights[33], 0.0);

    // Captures often stop before the trailing padding.
    let unpadded = read_vhgt_heightmap(&payload[..1093], Endianness::Big).expect("VHGT without padding");
    assert_eq!(unpadded, map);

    match read_vhgt_heightmap(&payload[..1092], Endianness::Big) {
        Err(CodecError::InsufficientData { needed, available }) => {
            assert_eq!((needed, available), (1093, 1092));
        }
        other => panic!("expected insufficient data, got {other:?}"),
    }
}

#[test]
fn cell_grid() {
    let mut payload = Vec::new();
    payload.extend((-1i32).to_le_bytes());
    payload.extend(4i32.to_le_bytes());
    let grid = read_xclc_cell_grid(&payload, Endianness::Little).expect("XCLC");
    assert_eq!((grid.x, grid.y, grid.flags), (-1, 4, 0));
    payload.extend(2u32.to_le_bytes());
    assert_eq!(read_xclc_cell_grid(&payload, false).expect("XCLC").flags, 2);
    assert!(read_xclc_cell_grid(&payload[..7], false).is_err());
}

#[test]
fn placement() {
    let values = [10.0f32, 20.0, 30.0, 0.0, 1.0, 3.0];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
    let p = read_data_position(&payload, Endianness::Big).expect("DATA");
    assert_eq!(p.position, [10.0, 20.0, 30.0]);
    assert_eq!(p.rotation, [0.0, 1.0, 3.0]);
    assert!(read_data_position(&payload[..20], Endianness::Big).is_err());
}

#[test]
fn base_and_scale() {
    assert_eq!(read_name_form_id(&[0, 0, 0x12, 0x34], Endianness::Big).expect("NAME"), 0x1234);
    assert_eq!(read_xscl_scale(&1.25f32.to_le_bytes(), Endianness::Little).expect("XSCL"), 1.25);
    let err = read_name_form_id(&[1, 2], Endianness::Big).unwrap_err();
    assert_eq!(err.to_string(), "Insufficient data: need 4 bytes, have 2");
}
