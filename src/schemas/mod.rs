//! Declarative subrecord layouts.
//!
//! Each submodule registers the subrecords of one content family. Splitting is for
//! organisation only: everything lands in one immutable [`SchemaRegistry`].
//!
//! Conventions used by the tables:
//! - `key("XXXX")` matches the signature in every record type,
//!   `.in_record(sig("RRRR"))` narrows to one record type, `.with_len(n)` to one
//!   payload length.
//! - Layouts longer than what the payload carries simply stop early; layouts that
//!   differ between game versions are registered per length.

use crate::field::{FieldType, SubrecordField};
use crate::schema::{SchemaKey, SchemaRegistry, SubrecordSchema};
use crate::signature::sig;

mod actors;
mod audio;
mod common;
mod items;
mod magic;
mod navmesh;
mod quests;
mod visuals;
mod world;

pub(crate) fn register_all(reg: &mut SchemaRegistry) {
    common::register(reg);
    items::register(reg);
    actors::register(reg);
    world::register(reg);
    navmesh::register(reg);
    magic::register(reg);
    quests::register(reg);
    visuals::register(reg);
    audio::register(reg);
}

pub(crate) const fn key(signature: &'static str) -> SchemaKey {
    SchemaKey::new(sig(signature))
}

pub(crate) const fn f(name: &'static str, ty: FieldType) -> SubrecordField {
    SubrecordField::new(name, ty)
}

pub(crate) const fn sized(name: &'static str, ty: FieldType, size: usize) -> SubrecordField {
    SubrecordField::sized(name, ty, size)
}

pub(crate) const fn pad(size: usize) -> SubrecordField {
    SubrecordField::padding(size)
}

pub(crate) fn fixed(fields: Vec<SubrecordField>) -> SubrecordSchema {
    SubrecordSchema::fixed(fields)
}

pub(crate) fn variable(fields: Vec<SubrecordField>) -> SubrecordSchema {
    SubrecordSchema::variable(fields)
}

pub(crate) fn repeating(fields: Vec<SubrecordField>) -> SubrecordSchema {
    SubrecordSchema::repeating(fields)
}

pub(crate) fn single(name: &'static str, ty: FieldType) -> SubrecordSchema {
    SubrecordSchema::fixed(vec![f(name, ty)])
}

pub(crate) fn form_id(name: &'static str) -> SubrecordSchema {
    single(name, FieldType::FormId)
}

pub(crate) fn form_id_array() -> SubrecordSchema {
    repeating(vec![f("FormId", FieldType::FormId)])
}

pub(crate) fn float_array() -> SubrecordSchema {
    repeating(vec![f("Value", FieldType::Float)])
}

pub(crate) fn byte_array(name: &'static str) -> SubrecordSchema {
    variable(vec![f(name, FieldType::ByteArray)])
}

pub(crate) fn marker() -> SubrecordSchema {
    variable(Vec::new())
}

/// Register the same schema under several record types.
pub(crate) fn register_in(
    reg: &mut SchemaRegistry,
    signature: &'static str,
    record_types: &[&'static str],
    schema: SubrecordSchema,
) {
    for &rt in record_types {
        reg.register(key(signature).in_record(sig(rt)), schema.clone());
    }
}

pub(crate) fn register_strings(reg: &mut SchemaRegistry, signatures: &[&'static str]) {
    for &s in signatures {
        reg.register_string(sig(s));
    }
}
