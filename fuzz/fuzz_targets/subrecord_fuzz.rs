//! Subrecord fuzz target: the first 8 bytes pick a signature and record type, the
//! rest is the payload. Convert and both read paths must never panic.
//! Build with: cargo fuzz run subrecord_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use esmconv::convert::convert_subrecord;
    use esmconv::read::read_subrecord;
    use esmconv::schema::registry;
    use esmconv::{Endianness, Signature};

    if data.len() < 8 {
        return;
    }
    let (Some(sig), Some(rt)) = (Signature::from_slice(&data[..4]), Signature::from_slice(&data[4..8]))
    else {
        return;
    };
    let payload = &data[8..];
    let mut buf = payload.to_vec();
    if convert_subrecord(registry(), sig, rt, &mut buf) {
        assert!(buf.len() <= payload.len());
    } else {
        assert_eq!(buf, payload);
    }
    let _ = read_subrecord(registry(), sig, rt, payload, Endianness::Big);
    let _ = read_subrecord(registry(), sig, rt, payload, Endianness::Little);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run subrecord_fuzz");
}
