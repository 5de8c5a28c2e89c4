//! Navmesh converters: count-driven layouts built once per byte order and compared.

use esmconv::convert;
use esmconv::navmesh::{convert_nvci, convert_nvgd, convert_nvmi, NVMI_ISLAND};

/// Writes the same logical payload in either byte order.
struct Payload {
    big: bool,
    bytes: Vec<u8>,
}

impl Payload {
    fn new(big: bool) -> Self {
        Payload { big, bytes: Vec::new() }
    }

    fn u16(&mut self, v: u16) -> &mut Self {
        let b = if self.big { v.to_be_bytes() } else { v.to_le_bytes() };
        self.bytes.extend(b);
        self
    }

    fn u32(&mut self, v: u32) -> &mut Self {
        let b = if self.big { v.to_be_bytes() } else { v.to_le_bytes() };
        self.bytes.extend(b);
        self
    }

    fn f32(&mut self, v: f32) -> &mut Self {
        self.u32(v.to_bits())
    }

    fn raw(&mut self, b: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(b);
        self
    }
}

fn both(build: impl Fn(&mut Payload)) -> (Vec<u8>, Vec<u8>) {
    let mut be = Payload::new(true);
    let mut le = Payload::new(false);
    build(&mut be);
    build(&mut le);
    (be.bytes, le.bytes)
}

fn nvmi(p: &mut Payload, flags: u32) {
    p.u32(flags).u32(0x0001_0203).u32(0x0004_0506).u16(0xFFFE).u16(3);
    p.f32(100.0).f32(-200.0).f32(5.5);
    if flags & NVMI_ISLAND != 0 {
        for v in [0.0, 1.0, 2.0, 10.0, 11.0, 12.0] {
            p.f32(v);
        }
        p.u16(2).u16(3);
        for i in 0..12 {
            p.u16(i);
        }
        for i in 0..9 {
            p.f32(i as f32 * 0.5);
        }
    }
}

#[test]
fn nvmi_plain() {
    let (console, pc) = both(|p| nvmi(p, 0x01));
    assert_eq!(console.len(), 28);
    assert_eq!(convert("NVMI", "NAVI", &console).expect("NVMI"), pc);
}

#[test]
fn nvmi_island() {
    let (console, pc) = both(|p| nvmi(p, NVMI_ISLAND | 0x01));
    assert_eq!(convert("NVMI", "NAVI", &console).expect("NVMI"), pc);
}

#[test]
fn nvmi_trailing_bytes_preserved() {
    let (mut console, mut pc) = both(|p| nvmi(p, 0));
    console.extend([0xAB, 0xCD]);
    pc.extend([0xAB, 0xCD]);
    let mut buf = console.clone();
    assert!(!convert_nvmi(&mut buf));
    assert_eq!(buf, pc);
}

#[test]
fn nvci_arrays() {
    let (console, pc) = both(|p| {
        p.u32(0xDEAD_BEEF);
        p.u32(2).u32(0x10).u32(0x11);
        p.u32(0);
        p.u32(3).u32(0x20).u32(0x21).u32(0x22);
    });
    let mut buf = console.clone();
    assert!(convert_nvci(&mut buf));
    assert_eq!(buf, pc);
}

#[test]
fn nvci_truncated_table_stops() {
    let mut console = Payload::new(true);
    console.u32(1).u32(5).u32(0x10).raw(&[0xAA, 0xBB]);
    let mut buf = console.bytes.clone();
    assert!(!convert_nvci(&mut buf));
    let mut expected = Payload::new(false);
    expected.u32(1).u32(5).u32(0x10).raw(&[0xAA, 0xBB]);
    assert_eq!(buf, expected.bytes);
}

#[test]
fn nvgd_cells() {
    let (console, pc) = both(|p| {
        p.u32(2);
        p.f32(512.0).f32(256.0);
        for v in [-1.0, -2.0, -3.0, 1.0, 2.0, 3.0] {
            p.f32(v);
        }
        // 2×2 cells
        p.u16(1).u16(7);
        p.u16(0);
        p.u16(3).u16(1).u16(2).u16(3);
        p.u16(2).u16(400).u16(401);
    });
    let mut buf = console.clone();
    assert!(convert_nvgd(&mut buf));
    assert_eq!(buf, pc);
    assert_eq!(convert("NVGD", "NAVM", &console).expect("NVGD"), pc);
}

#[test]
fn nvgd_huge_divisor_is_bounded_by_buffer() {
    let mut console = Payload::new(true);
    console.u32(u32::MAX).f32(1.0);
    let mut buf = console.bytes.clone();
    assert!(!convert_nvgd(&mut buf));
    assert_eq!(&buf[..4], &u32::MAX.to_le_bytes());
    assert_eq!(&buf[4..], &1.0f32.to_le_bytes());
}

#[test]
fn empty_payloads() {
    assert!(!convert_nvmi(&mut []));
    assert_eq!(convert("NVCI", "NAVI", &[]).expect("NVCI"), Vec::<u8>::new());
}
