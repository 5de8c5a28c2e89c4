//! Fallback-usage diagnostics.
//!
//! When enabled, every heuristic schema substitution made by the resolver is
//! counted under (kind, record type, subrecord, data length). The counts exist for
//! offline schema-coverage auditing only; nothing in the codec reads them.
//!
//! Recording is lock-free from the caller's side: the map is a sharded [`DashMap`]
//! and the enable flag is an [`AtomicBool`]. Counts may be slightly off under heavy
//! contention with a concurrent [`FallbackLog::clear`]; conversion results never are.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;

use dashmap::DashMap;
use tracing::trace;

use crate::signature::Signature;

/// Which heuristic produced the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FallbackKind {
    /// `DATA` of at most 2 bytes kept as bytes.
    DataByteArraySmall,
    /// `DATA` of at most 64 bytes, multiple of 4, treated as floats.
    DataFloatArray,
    /// Any other `DATA` kept as bytes.
    DataByteArrayLarge,
    /// Unknown image-space modifier subrecord treated as floats.
    ImadFloatArrayDefault,
}

impl FallbackKind {
    pub const fn label(self) -> &'static str {
        match self {
            FallbackKind::DataByteArraySmall => "DATA-ByteArray-Small",
            FallbackKind::DataFloatArray => "DATA-FloatArray",
            FallbackKind::DataByteArrayLarge => "DATA-ByteArray-Large",
            FallbackKind::ImadFloatArrayDefault => "IMAD-FloatArray-Default",
        }
    }
}

impl fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FallbackKey {
    kind: FallbackKind,
    record_type: Signature,
    subrecord: Signature,
    data_length: usize,
}

/// One row of the usage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackUsage {
    pub kind: FallbackKind,
    pub record_type: Signature,
    pub subrecord: Signature,
    pub data_length: usize,
    pub count: u64,
}

/// Counter map guarded by an enable flag.
#[derive(Debug, Default)]
pub struct FallbackLog {
    enabled: AtomicBool,
    counts: DashMap<FallbackKey, u64>,
}

impl FallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Count one occurrence. No-op while disabled.
    pub fn record(
        &self,
        kind: FallbackKind,
        record_type: Signature,
        subrecord: Signature,
        data_length: usize,
    ) {
        if !self.is_enabled() {
            return;
        }
        trace!(%kind, %record_type, %subrecord, data_length, "schema fallback");
        let key = FallbackKey { kind, record_type, subrecord, data_length };
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn clear(&self) {
        self.counts.clear();
    }

    /// Snapshot sorted by kind, then by descending count. Ties are broken by record
    /// type, subrecord and length so the report is stable.
    pub fn usage(&self) -> Vec<FallbackUsage> {
        let mut rows: Vec<FallbackUsage> = self
            .counts
            .iter()
            .map(|entry| {
                let k = entry.key();
                FallbackUsage {
                    kind: k.kind,
                    record_type: k.record_type,
                    subrecord: k.subrecord,
                    data_length: k.data_length,
                    count: *entry.value(),
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then(b.count.cmp(&a.count))
                .then(a.record_type.cmp(&b.record_type))
                .then(a.subrecord.cmp(&b.subrecord))
                .then(a.data_length.cmp(&b.data_length))
        });
        rows
    }
}

static GLOBAL: LazyLock<FallbackLog> = LazyLock::new(FallbackLog::new);

pub(crate) fn record(kind: FallbackKind, record_type: Signature, subrecord: Signature, data_length: usize) {
    GLOBAL.record(kind, record_type, subrecord, data_length);
}

/// Turn process-wide fallback counting on or off. Off by default.
pub fn set_fallback_logging_enabled(enabled: bool) {
    GLOBAL.set_enabled(enabled);
}

pub fn is_fallback_logging_enabled() -> bool {
    GLOBAL.is_enabled()
}

/// Drop all counts, typically between batches.
pub fn clear_fallback_log() {
    GLOBAL.clear();
}

/// Current counts, sorted by kind then descending count.
pub fn fallback_usage() -> Vec<FallbackUsage> {
    GLOBAL.usage()
}
