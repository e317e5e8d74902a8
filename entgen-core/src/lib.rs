//! Core utilities and types for the entgen model generator.
//!
//! This crate provides the fundamental building blocks used across
//! the entgen ecosystem: string/identifier transforms, English
//! inflection, MySQL column-type mapping, and file-writing primitives.

mod file;
mod inflect;
mod type_mapper;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// Inflection
pub use inflect::{pluralize, singularize};
// Column type parsing and mapping
pub use type_mapper::{ColumnType, PhpType};
// String utilities
pub use utils::{
    implode_and_quote, remove_prefix, single_quote, to_camel_case, to_pascal_case, to_snake_case,
};
