use crate::{Column, ForeignKey, Result};

/// Tables and views reported by a schema source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableListing {
    pub tables: Vec<String>,
    pub views: Vec<String>,
}

/// The introspection boundary.
///
/// Implementations return raw native type strings (`"int(10) unsigned"`),
/// key indicators and comment text verbatim; classification happens
/// downstream. A live-database source would run `SHOW TABLES`, `DESCRIBE`
/// and a `KEY_COLUMN_USAGE` query behind this trait; [`crate::SchemaSnapshot`]
/// serves the same answers from a captured snapshot.
pub trait SchemaSource {
    /// List all tables and views whose name starts with `prefix`.
    fn list_tables(&self, prefix: &str) -> Result<TableListing>;

    /// Describe the columns of one table, in definition order.
    fn describe_columns(&self, table: &str) -> Result<Vec<Column>>;

    /// All foreign keys of the schema.
    fn list_foreign_keys(&self) -> Result<Vec<ForeignKey>>;
}
