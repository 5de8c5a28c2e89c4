//! Console → PC conversion.
//!
//! [`convert_in_place`] runs the override chain first, then resolves a schema and
//! walks its field list over the buffer, applying each field's transform. Nothing
//! here fails: short buffers are converted as far as they go, long buffers keep
//! their unconverted tail, and the only signal returned to callers is whether any
//! schema applied.

use tracing::{debug, trace};

use crate::field::SubrecordField;
use crate::overrides;
use crate::schema::{registry, SchemaMode, SchemaRegistry, SubrecordSchema};
use crate::signature::Signature;

/// Convert a copy of `payload`. `None` means no schema or override applies.
pub fn convert(signature: &str, record_type: &str, payload: &[u8]) -> Option<Vec<u8>> {
    let mut out = payload.to_vec();
    convert_in_place(signature, record_type, &mut out).then_some(out)
}

/// Convert `payload` in place. Returns `false` (buffer untouched) when no schema or
/// override applies. The buffer may shrink.
pub fn convert_in_place(signature: &str, record_type: &str, payload: &mut Vec<u8>) -> bool {
    let (Some(sig), Some(rt)) = (Signature::parse(signature), Signature::parse(record_type)) else {
        debug!(signature, record_type, "not a 4-byte tag, left unconverted");
        return false;
    };
    convert_subrecord(registry(), sig, rt, payload)
}

/// Convert against an explicit registry.
pub fn convert_subrecord(
    registry: &SchemaRegistry,
    signature: Signature,
    record_type: Signature,
    payload: &mut Vec<u8>,
) -> bool {
    if let Some(o) = overrides::find(signature, record_type, payload) {
        trace!(
            signature = %signature,
            record_type = %record_type,
            len = payload.len(),
            handler = o.name,
            "override"
        );
        (o.apply)(payload);
        return true;
    }

    match registry.resolve(signature, record_type, payload.len()) {
        Some(schema) => {
            apply_schema(schema, payload);
            true
        }
        None => {
            debug!(
                signature = %signature,
                record_type = %record_type,
                len = payload.len(),
                "no schema"
            );
            false
        }
    }
}

/// Apply a schema's field transforms according to its mode.
pub fn apply_schema(schema: &SubrecordSchema, data: &mut [u8]) {
    match schema.mode {
        SchemaMode::Fixed(expected) => {
            if data.len() != expected {
                trace!(expected, len = data.len(), "fixed layout length differs");
            }
            apply_fields(&schema.fields, data);
        }
        SchemaMode::Variable => {
            apply_fields(&schema.fields, data);
        }
        SchemaMode::Repeating => apply_repeating(&schema.fields, data),
    }
}

/// Walk `fields` once from the start of `data`, converting each field that fits.
/// Stops at the first field that does not fit. Returns the bytes consumed.
pub fn apply_fields(fields: &[SubrecordField], data: &mut [u8]) -> usize {
    let mut pos = 0;
    for field in fields {
        let remaining = data.len() - pos;
        let extent = field.extent(remaining);
        if extent > remaining {
            trace!(field = field.name, offset = pos, extent, remaining, "field walk truncated");
            break;
        }
        field.ty.convert(&mut data[pos..pos + extent]);
        pos += extent;
    }
    pos
}

fn apply_repeating(fields: &[SubrecordField], data: &mut [u8]) {
    let Some(element) = fields
        .iter()
        .map(SubrecordField::size)
        .sum::<Option<usize>>()
        .filter(|&n| n > 0)
    else {
        return;
    };
    if data.len() % element != 0 {
        debug!(element, len = data.len(), "repeating length is not a whole number of elements");
        // A single-field element cannot be partially valid.
        if fields.len() == 1 {
            return;
        }
    }
    for chunk in data.chunks_mut(element) {
        apply_fields(fields, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;

    #[test]
    fn walk_stops_at_first_short_field() {
        let fields = [
            SubrecordField::new("A", FieldType::UInt16),
            SubrecordField::new("B", FieldType::UInt32),
        ];
        let mut data = [1, 2, 3, 4, 5];
        assert_eq!(apply_fields(&fields, &mut data), 2);
        assert_eq!(data, [2, 1, 3, 4, 5]);
    }

    #[test]
    fn trailing_variable_field_takes_rest() {
        let fields = [
            SubrecordField::new("Id", FieldType::FormId),
            SubrecordField::new("Rest", FieldType::ByteArray),
        ];
        let mut data = [1, 2, 3, 4, 9, 9, 9];
        assert_eq!(apply_fields(&fields, &mut data), 7);
        assert_eq!(data, [4, 3, 2, 1, 9, 9, 9]);
    }
}
