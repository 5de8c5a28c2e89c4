//! Special-case conversions run ahead of schema lookup.

use esmconv::overrides::{find, OVERRIDES, TERRAIN_LAYER_MARKER};
use esmconv::{convert, Signature};

fn tag(s: &str) -> Signature {
    Signature::parse(s).expect("tag")
}

fn words_be(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

fn words_le(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn chain_order_and_lookup() {
    assert_eq!(OVERRIDES[0].name, "PKDT(12)");
    assert!(find(tag("PKDT"), tag("PACK"), &[0; 12]).is_some());
    assert!(find(tag("PKDT"), tag("PACK"), &[0; 8]).is_none());
    assert!(find(tag("PKDT"), tag("NPC_"), &[0; 12]).is_none());
    assert_eq!(find(tag("NVDP"), tag("NAVM"), &[0; 16]).map(|o| o.name), Some("NVDP"));
}

#[test]
fn package_data() {
    let console = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    let pc = convert("PKDT", "PACK", &console).expect("PKDT");
    assert_eq!(pc, [4, 3, 2, 1, 5, 6, 8, 7, 10, 9, 11, 12]);
}

#[test]
fn perk_data_short_form_drops_trailing_zero() {
    assert_eq!(convert("DATA", "PERK", &[1, 2, 3, 4, 0]).expect("PERK"), [1, 2, 3, 4]);
    // Non-zero trailing byte keeps the 5-byte layout.
    assert_eq!(convert("DATA", "PERK", &[1, 2, 3, 4, 1]).expect("PERK"), [1, 2, 3, 4, 1]);
}

#[test]
fn perk_effect_data_swaps_only_leading_word() {
    let pc = convert("DATA", "PERK", &[1, 2, 3, 4, 5, 6, 7, 8]).expect("PERK");
    assert_eq!(pc, [4, 3, 2, 1, 5, 6, 7, 8]);
}

#[test]
fn idle_data_shrinks_to_pc_layout() {
    let pc = convert("DATA", "IDLE", &[1, 2, 3, 4, 5, 6, 7, 8]).expect("IDLE");
    assert_eq!(pc, [1, 2, 3, 4, 6, 5]);
}

#[test]
fn image_space_modifier_leading_word_kept() {
    let mut console = vec![0xAA, 0xBB, 0xCC, 0xDD];
    console.extend(words_be(&(0..60).collect::<Vec<_>>()));
    assert_eq!(console.len(), 244);
    let pc = convert("DNAM", "IMAD", &console).expect("IMAD");
    assert_eq!(&pc[..4], &[0xAA, 0xBB, 0xCC, 0xDD]);
    assert_eq!(&pc[4..], words_le(&(0..60).collect::<Vec<_>>()).as_slice());
}

#[test]
fn weather_image_spaces_swap_only_known_ranges() {
    let console: Vec<u8> = (0..304).map(|i| i as u8).collect();
    let pc = convert("INAM", "WTHR", &console).expect("WTHR");
    let word = |buf: &[u8], at: usize| buf[at..at + 4].to_vec();
    let reversed = |at: usize| {
        let mut w = word(&console, at);
        w.reverse();
        w
    };
    for at in [0, 40, 80, 100, 124, 152, 208] {
        assert_eq!(word(&pc, at), reversed(at), "offset {at}");
    }
    for at in [84, 96, 128, 148, 156, 204, 212, 300] {
        assert_eq!(word(&pc, at), word(&console, at), "offset {at}");
    }
}

#[test]
fn note_topic_form_id() {
    assert_eq!(convert("TNAM", "NOTE", &[0, 1, 2, 3]).expect("NOTE"), [3, 2, 1, 0]);
    // Longer TNAM is note text.
    assert_eq!(convert("TNAM", "NOTE", b"Hello\0").expect("NOTE"), b"Hello\0");
}

#[test]
fn navmesh_triangles_swap_and_trade_flags() {
    let console = [
        0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0xAA, 0xBB, 0xCC, 0xDD,
    ];
    let pc = convert("NVTR", "NAVM", &console).expect("NVTR");
    assert_eq!(
        pc,
        [0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0xDD, 0xCC, 0xBB, 0xAA]
    );
    let two: Vec<u8> = console.iter().chain(console.iter()).copied().collect();
    let pc2 = convert("NVTR", "NAVM", &two).expect("NVTR");
    assert_eq!(&pc2[..16], pc.as_slice());
    assert_eq!(&pc2[16..], pc.as_slice());
}

#[test]
fn navmesh_doors_keep_padding() {
    let pc = convert("NVDP", "NAVM", &[0xAA, 0xBB, 0xCC, 0xDD, 0x01, 0x00, 0xFF, 0xFF]).expect("NVDP");
    assert_eq!(pc, [0xDD, 0xCC, 0xBB, 0xAA, 0x00, 0x01, 0xFF, 0xFF]);
}

#[test]
fn terrain_layer_marker_byte() {
    let console = [0x00, 0x01, 0x02, 0x03, 0x02, 0x00, 0x00, 0x05];
    for sig in ["ATXT", "BTXT"] {
        let pc = convert(sig, "LAND", &console).expect("layer");
        assert_eq!(pc, [0x03, 0x02, 0x01, 0x00, 0x02, TERRAIN_LAYER_MARKER, 0x05, 0x00], "{sig}");
    }
}
