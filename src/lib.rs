//! # esmconv: console → PC subrecord codec for Gamebryo plugin data
//!
//! Console builds of the engine store plugin (`.esm`) data big-endian with a few
//! platform-specific layouts; the PC build expects little-endian. This crate knows
//! the layout of each subrecord, keyed by its 4-character signature, the record it
//! appears in and sometimes its length, and uses that knowledge two ways:
//!
//! - **Convert**: rewrite a console payload in place so the PC build reads it
//!   ([`convert`], [`convert_in_place`]). Special layouts are handled by an
//!   override chain checked before the schema table.
//! - **Read**: decode a payload in either byte order into named values without
//!   changing it ([`read_fields`] and the dedicated `read_*` decoders).
//!
//! ## Schemas
//!
//! A schema is an ordered list of typed fields plus a mode:
//!
//! - fixed: fields consumed once, total length known
//! - variable: fields consumed once, trailing bytes left as they are
//! - repeating: the field list is one element repeated across the buffer
//!
//! Lookup goes from most to least specific key and ends in a small set of
//! generic fallbacks; see [`schema`]. Fallback hits can be counted for coverage
//! work with [`set_fallback_logging_enabled`] and [`fallback_usage`].
//!
//! ## Example
//!
//! ```
//! // A placed reference's base object, big-endian on console.
//! let pc = esmconv::convert("NAME", "REFR", &[0x00, 0x01, 0x23, 0x45]).unwrap();
//! assert_eq!(pc, [0x45, 0x23, 0x01, 0x00]);
//!
//! let fields = esmconv::read_fields("NAME", "REFR", &pc, esmconv::Endianness::Little);
//! assert_eq!(fields["Base"].as_form_id(), Some(0x0001_2345));
//! ```

pub mod audit;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod field;
pub mod navmesh;
pub mod overrides;
pub mod read;
pub mod schema;
mod schemas;
pub mod signature;
pub mod value;

pub use audit::CoverageReport;
pub use convert::{convert, convert_in_place};
pub use error::CodecError;
pub use fallback::{
    clear_fallback_log, fallback_usage, is_fallback_logging_enabled, set_fallback_logging_enabled,
    FallbackKind, FallbackUsage,
};
pub use field::{Endianness, FieldType, SubrecordField};
pub use read::{
    read_data_position, read_fields, read_name_form_id, read_vhgt_heightmap, read_xclc_cell_grid,
    read_xscl_scale, CellGrid, Heightmap, Placement,
};
pub use schema::{all_registered_signatures, resolve, SchemaKey, SchemaMode, SubrecordSchema};
pub use signature::Signature;
pub use value::{FieldMap, Rgba, Value};
