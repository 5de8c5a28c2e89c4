//! Subrecord schemas and the registry that resolves them.
//!
//! A [`SubrecordSchema`] is an ordered field list plus a [`SchemaMode`]. Schemas are
//! registered under a [`SchemaKey`] of (signature, optional record type, optional
//! data length) and resolved from most to least specific:
//!
//! 1. image-space modifier (`IMAD`) rule
//! 2. (signature, record type, length)
//! 3. (signature, record type)
//! 4. (signature, length)
//! 5. (signature)
//! 6. generic `DATA` sizing heuristic (counted as a fallback)
//! 7. weather (`WTHR`) keyed `?IAD` channels
//! 8. no schema
//!
//! The registry is built once ([`registry`]) and never mutated afterwards, so it can
//! be shared by any number of threads without locking.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::fallback::{self, FallbackKind};
use crate::field::{FieldType, SubrecordField};
use crate::signature::{sig, Signature};

/// How a schema's field list is applied to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Fixed total length, fields consumed once.
    Fixed(usize),
    /// Fields consumed once; trailing bytes beyond them are left untouched.
    Variable,
    /// The field list describes one element repeated across the whole buffer.
    Repeating,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubrecordSchema {
    pub fields: Cow<'static, [SubrecordField]>,
    pub mode: SchemaMode,
}

impl SubrecordSchema {
    /// Fixed layout; the expected size is the sum of the field sizes. Layouts that
    /// end in a variable-size field are registered as [`SchemaMode::Variable`].
    pub fn fixed(fields: Vec<SubrecordField>) -> Self {
        let mode = match sum_sizes(&fields) {
            Some(n) if n > 0 => SchemaMode::Fixed(n),
            _ => SchemaMode::Variable,
        };
        SubrecordSchema { fields: Cow::Owned(fields), mode }
    }

    pub fn variable(fields: Vec<SubrecordField>) -> Self {
        SubrecordSchema { fields: Cow::Owned(fields), mode: SchemaMode::Variable }
    }

    pub fn repeating(fields: Vec<SubrecordField>) -> Self {
        debug_assert!(
            sum_sizes(&fields).is_some_and(|n| n > 0),
            "repeating schema needs fixed-size fields"
        );
        SubrecordSchema { fields: Cow::Owned(fields), mode: SchemaMode::Repeating }
    }

    const fn borrowed(fields: &'static [SubrecordField], mode: SchemaMode) -> Self {
        SubrecordSchema { fields: Cow::Borrowed(fields), mode }
    }

    /// Size of one repeating element (or of the fixed part of a single-shot layout).
    pub fn element_size(&self) -> Option<usize> {
        sum_sizes(&self.fields)
    }

    /// The `ExpectedSize` convention: `>0` fixed, `0` variable, `<0` repeating.
    pub fn expected_size(&self) -> isize {
        match self.mode {
            SchemaMode::Fixed(n) => n as isize,
            SchemaMode::Variable => 0,
            SchemaMode::Repeating => -1,
        }
    }
}

fn sum_sizes(fields: &[SubrecordField]) -> Option<usize> {
    fields.iter().map(SubrecordField::size).sum()
}

const FLOAT_FIELDS: &[SubrecordField] = &[SubrecordField::new("Value", FieldType::Float)];
const BYTE_FIELDS: &[SubrecordField] = &[SubrecordField::new("Data", FieldType::ByteArray)];
const STRING_FIELDS: &[SubrecordField] = &[SubrecordField::new("Value", FieldType::String)];
const FORM_ID_FIELDS: &[SubrecordField] = &[SubrecordField::new("FormId", FieldType::FormId)];

pub(crate) static FLOAT_ARRAY: SubrecordSchema =
    SubrecordSchema::borrowed(FLOAT_FIELDS, SchemaMode::Repeating);
pub(crate) static BYTE_ARRAY: SubrecordSchema =
    SubrecordSchema::borrowed(BYTE_FIELDS, SchemaMode::Variable);
pub(crate) static STRING: SubrecordSchema =
    SubrecordSchema::borrowed(STRING_FIELDS, SchemaMode::Variable);
static FORM_ID: SubrecordSchema = SubrecordSchema::borrowed(FORM_ID_FIELDS, SchemaMode::Fixed(4));

/// Registry key. Unset parts act as wildcards during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaKey {
    pub signature: Signature,
    pub record_type: Option<Signature>,
    pub data_length: Option<usize>,
}

impl SchemaKey {
    pub const fn new(signature: Signature) -> Self {
        SchemaKey { signature, record_type: None, data_length: None }
    }

    pub const fn in_record(mut self, record_type: Signature) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub const fn with_len(mut self, data_length: usize) -> Self {
        self.data_length = Some(data_length);
        self
    }
}

const IMAD: Signature = sig("IMAD");
const WTHR: Signature = sig("WTHR");
const DATA: Signature = sig("DATA");
const EDID: Signature = sig("EDID");

/// Image-space modifier subrecords holding keyframed float tables.
const IMAD_FLOAT_SIGNATURES: &[Signature] = &[
    sig("DNAM"),
    sig("BNAM"),
    sig("VNAM"),
    sig("TNAM"),
    sig("NAM3"),
    sig("RNAM"),
    sig("SNAM"),
    sig("UNAM"),
    sig("NAM1"),
    sig("NAM2"),
    sig("WNAM"),
    sig("XNAM"),
    sig("YNAM"),
    sig("NAM4"),
];

/// Image-space modifier sound references.
const IMAD_FORM_ID_SIGNATURES: &[Signature] = &[sig("RDSD"), sig("RDSI")];

/// Immutable schema table plus the set of signature-only string subrecords.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<SchemaKey, SubrecordSchema>,
    string_signatures: HashSet<Signature>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full table from the declarative registrations.
    pub fn with_builtin_schemas() -> Self {
        let mut reg = SchemaRegistry::new();
        crate::schemas::register_all(&mut reg);
        debug!(
            entries = reg.schemas.len(),
            strings = reg.string_signatures.len(),
            "built subrecord schema table"
        );
        reg
    }

    /// Register a schema. A key may be registered once; a second registration
    /// replaces the first and is reported.
    pub fn register(&mut self, key: SchemaKey, schema: SubrecordSchema) {
        if self.schemas.insert(key, schema).is_some() {
            warn!(
                signature = %key.signature,
                record_type = ?key.record_type.map(|s| s.to_string()),
                data_length = ?key.data_length,
                "duplicate schema registration"
            );
        }
    }

    /// Register a subrecord that is a NUL-terminated string in every record type.
    pub fn register_string(&mut self, signature: Signature) {
        self.string_signatures.insert(signature);
        self.register(SchemaKey::new(signature), STRING.clone());
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn get(&self, key: &SchemaKey) -> Option<&SubrecordSchema> {
        self.schemas.get(key)
    }

    pub fn is_string_signature(&self, signature: Signature) -> bool {
        self.string_signatures.contains(&signature)
    }

    /// Every signature in the table and in the string set.
    pub fn signatures(&self) -> BTreeSet<Signature> {
        self.schemas
            .keys()
            .map(|k| k.signature)
            .chain(self.string_signatures.iter().copied())
            .collect()
    }

    /// Resolve the schema for one subrecord. Total: never panics, returns `None`
    /// when nothing applies.
    pub fn resolve(
        &self,
        signature: Signature,
        record_type: Signature,
        data_length: usize,
    ) -> Option<&SubrecordSchema> {
        if record_type == IMAD {
            return Some(self.resolve_imad(signature, data_length));
        }

        let key = SchemaKey::new(signature);
        let candidates = [
            key.in_record(record_type).with_len(data_length),
            key.in_record(record_type),
            key.with_len(data_length),
            key,
        ];
        if let Some(schema) = candidates.iter().find_map(|k| self.schemas.get(k)) {
            return Some(schema);
        }

        if signature == DATA {
            let (kind, schema) = if data_length <= 2 {
                (FallbackKind::DataByteArraySmall, &BYTE_ARRAY)
            } else if data_length <= 64 && data_length % 4 == 0 {
                (FallbackKind::DataFloatArray, &FLOAT_ARRAY)
            } else {
                (FallbackKind::DataByteArrayLarge, &BYTE_ARRAY)
            };
            fallback::record(kind, record_type, signature, data_length);
            return Some(schema);
        }

        if record_type == WTHR && signature.is_keyed_iad() {
            return Some(&FLOAT_ARRAY);
        }

        None
    }

    fn resolve_imad(&self, signature: Signature, data_length: usize) -> &SubrecordSchema {
        if signature == EDID {
            return &STRING;
        }
        if IMAD_FORM_ID_SIGNATURES.contains(&signature) {
            return &FORM_ID;
        }
        if IMAD_FLOAT_SIGNATURES.contains(&signature) || signature.is_keyed_iad() {
            return &FLOAT_ARRAY;
        }
        fallback::record(FallbackKind::ImadFloatArrayDefault, IMAD, signature, data_length);
        &FLOAT_ARRAY
    }
}

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::with_builtin_schemas);

/// The process-wide schema table.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

/// Resolve against the process-wide table, accepting caller-supplied tags.
pub fn resolve(signature: &str, record_type: &str, data_length: usize) -> Option<&'static SubrecordSchema> {
    let signature = Signature::parse(signature)?;
    let record_type = Signature::parse(record_type)?;
    registry().resolve(signature, record_type, data_length)
}

/// All 4-character tags known to the table, including signature-only strings.
pub fn all_registered_signatures() -> BTreeSet<Signature> {
    registry().signatures()
}
