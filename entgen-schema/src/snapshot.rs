use std::path::Path;

use serde::Deserialize;

use crate::{Column, Error, ForeignKey, Result, SchemaSource, Table, TableListing};

/// A schema snapshot loaded from a JSON document.
///
/// The snapshot carries the same answers a live introspection would
/// produce: table and view names, `DESCRIBE` rows per table, and the full
/// foreign-key listing.
///
/// ```json
/// {
///   "tables": [
///     {"name": "users", "columns": [
///       {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"}
///     ]}
///   ],
///   "views": [],
///   "foreign_keys": []
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaSnapshot {
    #[serde(default)]
    tables: Vec<Table>,
    #[serde(default)]
    views: Vec<String>,
    #[serde(default)]
    foreign_keys: Vec<ForeignKey>,
}

impl SchemaSnapshot {
    /// Open and parse a snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse snapshot JSON, attributing errors to `filename`.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(content, filename, e))
    }

    /// Build a snapshot directly from records (used by tests and tools).
    pub fn from_records(
        tables: Vec<Table>,
        views: Vec<String>,
        foreign_keys: Vec<ForeignKey>,
    ) -> Self {
        Self {
            tables,
            views,
            foreign_keys,
        }
    }
}

impl SchemaSource for SchemaSnapshot {
    fn list_tables(&self, prefix: &str) -> Result<TableListing> {
        Ok(TableListing {
            tables: self
                .tables
                .iter()
                .map(|table| table.name.clone())
                .filter(|name| name.starts_with(prefix))
                .collect(),
            views: self
                .views
                .iter()
                .filter(|name| name.starts_with(prefix))
                .cloned()
                .collect(),
        })
    }

    fn describe_columns(&self, table: &str) -> Result<Vec<Column>> {
        self.tables
            .iter()
            .find(|candidate| candidate.name == table)
            .map(|table| table.columns.clone())
            .ok_or_else(|| {
                Box::new(Error::UnknownTable {
                    name: table.to_string(),
                })
            })
    }

    fn list_foreign_keys(&self) -> Result<Vec<ForeignKey>> {
        Ok(self.foreign_keys.clone())
    }
}
