//! Coverage audit over a plain-text subrecord listing.
//!
//! Each non-blank line that does not start with `#` is
//! `RTYP SIG HEXPAYLOAD`, e.g. `WEAP DNAM 3f800000`. An empty payload may be
//! omitted. Every entry is run through the convert path and the outcome tallied.

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::convert::convert_subrecord;
use crate::error::CodecError;
use crate::fallback::{fallback_usage, FallbackUsage};
use crate::schema::registry;
use crate::signature::Signature;

/// One parsed listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub record_type: Signature,
    pub signature: Signature,
    pub payload: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct CoverageReport {
    pub total: usize,
    pub converted: usize,
    /// Per (record type, signature) count of entries with no schema.
    pub no_schema: BTreeMap<(Signature, Signature), usize>,
    /// Fallback counters as they stood when the audit finished. Empty unless
    /// fallback logging was enabled.
    pub fallbacks: Vec<FallbackUsage>,
}

impl CoverageReport {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CodecError> {
        let mut report = CoverageReport::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(entry) = parse_line(i + 1, &line)? {
                report.add(entry);
            }
        }
        report.fallbacks = fallback_usage();
        debug!(
            total = report.total,
            converted = report.converted,
            unknown = report.no_schema_total(),
            "coverage audit finished"
        );
        Ok(report)
    }

    fn add(&mut self, entry: ListingEntry) {
        self.total += 1;
        let mut payload = entry.payload;
        if convert_subrecord(registry(), entry.signature, entry.record_type, &mut payload) {
            self.converted += 1;
        } else {
            *self.no_schema.entry((entry.record_type, entry.signature)).or_default() += 1;
        }
    }

    pub fn no_schema_total(&self) -> usize {
        self.no_schema.values().sum()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} subrecords, {} converted, {} without schema",
            self.total,
            self.converted,
            self.no_schema_total()
        )?;
        for ((rt, sig), n) in &self.no_schema {
            writeln!(f, "  no schema  {rt} {sig}  x{n}")?;
        }
        for u in &self.fallbacks {
            writeln!(
                f,
                "  fallback   {} {} len={}  {}  x{}",
                u.record_type, u.subrecord, u.data_length, u.kind, u.count
            )?;
        }
        Ok(())
    }
}

/// Parse one listing line. Blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ListingEntry>, CodecError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let parse_err = |message: String| CodecError::Parse { line: line_no, message };
    let mut parts = line.split_whitespace();
    let (Some(rt), Some(sig)) = (parts.next(), parts.next()) else {
        return Err(parse_err("expected `RTYP SIG HEXPAYLOAD`".into()));
    };
    let record_type: Signature = rt.parse().map_err(|e: CodecError| parse_err(e.to_string()))?;
    let signature: Signature = sig.parse().map_err(|e: CodecError| parse_err(e.to_string()))?;
    let payload = match parts.next() {
        Some(h) => hex::decode(h).map_err(|e| parse_err(format!("bad payload: {e}")))?,
        None => Vec::new(),
    };
    if parts.next().is_some() {
        return Err(parse_err("trailing tokens".into()));
    }
    Ok(Some(ListingEntry { record_type, signature, payload }))
}
