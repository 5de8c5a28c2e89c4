//! Special-case conversions checked before schema lookup.
//!
//! Each entry pairs an exact (signature, record type, length) predicate with a
//! hand-written transform for a layout that a flat field list cannot express.
//! Entries are checked in order and the first match wins. Overrides apply to the
//! convert path only.

use crate::convert::apply_fields;
use crate::field::{FieldType, SubrecordField};
use crate::navmesh;
use crate::signature::{sig, Signature};

/// One (predicate, handler) pair.
pub struct Override {
    pub name: &'static str,
    pub matches: fn(Signature, Signature, &[u8]) -> bool,
    /// Converts in place; may shrink the buffer.
    pub apply: fn(&mut Vec<u8>),
}

impl std::fmt::Debug for Override {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Override").field("name", &self.name).finish()
    }
}

const PACK: Signature = sig("PACK");
const PERK: Signature = sig("PERK");
const IDLE: Signature = sig("IDLE");
const IMAD: Signature = sig("IMAD");
const WTHR: Signature = sig("WTHR");
const NOTE: Signature = sig("NOTE");
const NAVM: Signature = sig("NAVM");
const NAVI: Signature = sig("NAVI");
const LAND: Signature = sig("LAND");

const NVTR_STRIDE: usize = 16;
const NVDP_STRIDE: usize = 8;

/// Fixed constant the PC build expects in the unused byte of terrain layer headers.
pub const TERRAIN_LAYER_MARKER: u8 = 0x88;

const TERRAIN_LAYER_FIELDS: &[SubrecordField] = &[
    SubrecordField::new("Texture", FieldType::FormId),
    SubrecordField::new("Quadrant", FieldType::UInt8),
    SubrecordField::new("Unused", FieldType::UInt8),
    SubrecordField::new("Layer", FieldType::Int16),
];

/// The override chain, in evaluation order.
pub static OVERRIDES: &[Override] = &[
    Override {
        name: "PKDT(12)",
        matches: |s, rt, d| s == sig("PKDT") && rt == PACK && d.len() == 12,
        apply: package_data,
    },
    Override {
        name: "PERK DATA(5)",
        matches: |s, rt, d| s == sig("DATA") && rt == PERK && d.len() == 5 && d[4] == 0,
        apply: perk_data_short,
    },
    Override {
        name: "PERK DATA(8)",
        matches: |s, rt, d| s == sig("DATA") && rt == PERK && d.len() == 8,
        apply: perk_data_effect,
    },
    Override {
        name: "IDLE DATA(8)",
        matches: |s, rt, d| s == sig("DATA") && rt == IDLE && d.len() == 8,
        apply: idle_data,
    },
    Override {
        name: "IMAD DNAM(244)",
        matches: |s, rt, d| s == sig("DNAM") && rt == IMAD && d.len() == 244,
        apply: image_space_modifier_data,
    },
    Override {
        name: "WTHR INAM(304)",
        matches: |s, rt, d| s == sig("INAM") && rt == WTHR && d.len() == 304,
        apply: weather_image_spaces,
    },
    Override {
        name: "NOTE TNAM(4)",
        matches: |s, rt, d| s == sig("TNAM") && rt == NOTE && d.len() == 4,
        apply: note_topic,
    },
    Override {
        name: "NVTR",
        matches: |s, rt, d| s == sig("NVTR") && rt == NAVM && d.len() % NVTR_STRIDE == 0,
        apply: navmesh_triangles,
    },
    Override {
        name: "NVDP",
        matches: |s, rt, d| s == sig("NVDP") && rt == NAVM && d.len() % NVDP_STRIDE == 0,
        apply: navmesh_doors,
    },
    Override {
        name: "ATXT/BTXT",
        matches: |s, rt, d| (s == sig("ATXT") || s == sig("BTXT")) && rt == LAND && d.len() == 8,
        apply: terrain_layer,
    },
    Override {
        name: "NVMI",
        matches: |s, rt, _| s == sig("NVMI") && rt == NAVI,
        apply: |d| {
            navmesh::convert_nvmi(d);
        },
    },
    Override {
        name: "NVCI",
        matches: |s, rt, _| s == sig("NVCI") && rt == NAVI,
        apply: |d| {
            navmesh::convert_nvci(d);
        },
    },
    Override {
        name: "NVGD",
        matches: |s, rt, _| s == sig("NVGD") && rt == NAVM,
        apply: |d| {
            navmesh::convert_nvgd(d);
        },
    },
];

/// First override matching this subrecord, if any.
pub fn find(signature: Signature, record_type: Signature, data: &[u8]) -> Option<&'static Override> {
    OVERRIDES.iter().find(|o| (o.matches)(signature, record_type, data))
}

fn swap_range(data: &mut [u8], start: usize, end: usize) {
    let end = end.min(data.len());
    if start < end {
        for word in data[start..end].chunks_exact_mut(4) {
            word.reverse();
        }
    }
}

/// General flags byte-reversed as a word, then the three 16-bit flag fields.
fn package_data(data: &mut Vec<u8>) {
    data.swap(0, 3);
    data.swap(1, 2);
    data.swap(6, 7);
    data.swap(8, 9);
}

/// PC stores the 5-byte console form without its trailing zero.
fn perk_data_short(data: &mut Vec<u8>) {
    data.truncate(4);
}

fn perk_data_effect(data: &mut Vec<u8>) {
    data[..4].reverse();
}

/// Keep the 6-byte PC layout: swap the replay delay and drop the console-only tail.
fn idle_data(data: &mut Vec<u8>) {
    data.swap(4, 5);
    data.truncate(6);
}

/// The first word is already little-endian on console.
fn image_space_modifier_data(data: &mut Vec<u8>) {
    let len = data.len();
    swap_range(data, 4, len);
}

/// Only these ranges hold big-endian words; the rest is zero fill or already little-endian.
fn weather_image_spaces(data: &mut Vec<u8>) {
    swap_range(data, 0, 84);
    swap_range(data, 100, 128);
    swap_range(data, 152, 156);
    swap_range(data, 208, 212);
}

/// A 4-byte TNAM in a note is a topic FormID, never text.
fn note_topic(data: &mut Vec<u8>) {
    data[..4].reverse();
}

/// Swap the eight 16-bit fields, then exchange the flags and cover flags.
fn navmesh_triangles(data: &mut Vec<u8>) {
    for tri in data.chunks_exact_mut(NVTR_STRIDE) {
        for word in tri.chunks_exact_mut(2) {
            word.swap(0, 1);
        }
        tri[12..16].rotate_left(2);
    }
}

/// FormID and triangle index swapped; the trailing two bytes are padding.
fn navmesh_doors(data: &mut Vec<u8>) {
    for door in data.chunks_exact_mut(NVDP_STRIDE) {
        door[..4].reverse();
        door.swap(4, 5);
    }
}

fn terrain_layer(data: &mut Vec<u8>) {
    apply_fields(TERRAIN_LAYER_FIELDS, data);
    data[5] = TERRAIN_LAYER_MARKER;
}
