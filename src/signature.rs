//! Four-character tags identifying records and subrecords.

use std::fmt;

use crate::error::CodecError;

/// A 4-byte ASCII tag such as `EDID`, `DATA` or `NPC_`.
///
/// Tags are compared bytewise. Keyed per-channel subrecords use non-printable
/// leading bytes (e.g. `\x00IAD`), so any byte value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(pub [u8; 4]);

impl Signature {
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Signature(bytes)
    }

    /// Build a signature from a 4-byte string literal. Panics at compile time when the
    /// literal has the wrong length, so only use it with constants.
    pub const fn from_static(tag: &'static str) -> Self {
        let b = tag.as_bytes();
        assert!(b.len() == 4, "signature literal must be 4 bytes");
        Signature([b[0], b[1], b[2], b[3]])
    }

    /// Parse a tag supplied by a caller. Returns `None` unless it is exactly 4 bytes.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::from_slice(tag.as_bytes())
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 4] = bytes.try_into().ok()?;
        Some(Signature(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// `?IAD` shape used by image-space and weather keyed channel subrecords.
    pub fn is_keyed_iad(&self) -> bool {
        &self.0[1..] == b"IAD"
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02X}", b)?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Signature {
    type Err = CodecError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Signature::parse(tag).ok_or_else(|| CodecError::InvalidSignature(tag.to_string()))
    }
}

impl From<[u8; 4]> for Signature {
    fn from(bytes: [u8; 4]) -> Self {
        Signature(bytes)
    }
}

/// Shorthand used by the schema tables.
pub(crate) const fn sig(tag: &'static str) -> Signature {
    Signature::from_static(tag)
}
