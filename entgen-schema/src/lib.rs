//! Schema model for the entgen model generator.
//!
//! This crate holds the in-memory representation of an introspected
//! relational schema and the sources that produce it:
//!
//! ```text
//! snapshot.json → SchemaSnapshot (SchemaSource) → SchemaModel → codegen
//! ```
//!
//! The model is built once per run and read-only afterwards. Everything
//! downstream (junction detection, relation resolution, assembly) borrows
//! it immutably.

mod column;
mod error;
mod foreign_key;
mod model;
mod snapshot;
mod source;
mod table;

pub use column::{Column, KeyKind};
pub use error::{Error, Result};
pub use foreign_key::ForeignKey;
pub use model::SchemaModel;
pub use snapshot::SchemaSnapshot;
pub use source::{SchemaSource, TableListing};
pub use table::Table;
