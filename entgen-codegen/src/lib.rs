//! Eloquent model code generation.
//!
//! This crate turns a built [`entgen_schema::SchemaModel`] into PHP model
//! source text:
//!
//! ```text
//! SchemaModel → junction detection → relation resolution → assembly → render
//! ```
//!
//! Junction tables are excluded from generation and surface only as the
//! pivot of `belongsToMany` relations. Every entity table yields two
//! documents: a base model that is always regenerated and a thin extension
//! model that is created once and then left to the user.

mod assemble;
mod error;
mod generator;
mod junction;
mod naming;
mod relation;
mod render;
mod template;

pub use assemble::{FieldDecl, GeneratedModel, assemble};
pub use error::TemplateError;
pub use generator::{
    GenerateReport, Generator, GeneratorConfig, PreviewFile, TimestampFields, WrittenFile,
};
pub use junction::is_junction;
pub use naming::{NamingConvention, PHP_NAMING, class_name, method_name};
pub use relation::{Relation, RelationKind, ResolveOptions, resolve};
pub use render::{render_base, render_extension};
pub use template::{
    Indent, RenderOptions, Segment, Template, TemplateSet, TemplateValues, collapse_blank_runs,
};
