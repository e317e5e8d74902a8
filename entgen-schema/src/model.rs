use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{ForeignKey, Result, SchemaSource, Table};

const NO_KEYS: &[ForeignKey] = &[];

/// The in-memory schema, built once per run.
///
/// Tables keep the listing order of the source; the foreign-key set is
/// sorted on build so every derived ordering is independent of the order
/// the source happened to return records in. Read-only after `build`.
#[derive(Debug, Clone)]
pub struct SchemaModel {
    tables: IndexMap<String, Table>,
    views: Vec<String>,
    foreign_keys: Vec<ForeignKey>,
    local: HashMap<String, Vec<ForeignKey>>,
    remote: HashMap<String, Vec<ForeignKey>>,
}

impl SchemaModel {
    /// Load tables, columns and foreign keys from a source.
    pub fn build(source: &dyn SchemaSource, prefix: &str) -> Result<Self> {
        let listing = source.list_tables(prefix)?;

        let mut tables = IndexMap::new();
        for name in listing.tables {
            let columns = source.describe_columns(&name)?;
            tables.insert(name.clone(), Table::new(name, columns));
        }

        let mut foreign_keys = source.list_foreign_keys()?;
        foreign_keys.sort_by(|a, b| {
            (&a.table, &a.column, &a.referenced_table)
                .cmp(&(&b.table, &b.column, &b.referenced_table))
        });

        let mut local: HashMap<String, Vec<ForeignKey>> = HashMap::new();
        let mut remote: HashMap<String, Vec<ForeignKey>> = HashMap::new();
        for key in &foreign_keys {
            local.entry(key.table.clone()).or_default().push(key.clone());
            remote
                .entry(key.referenced_table.clone())
                .or_default()
                .push(key.clone());
        }

        Ok(Self {
            tables,
            views: listing.views,
            foreign_keys,
            local,
            remote,
        })
    }

    /// All tables, in listing order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// The full foreign-key set, sorted by (table, column).
    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    /// Foreign keys owned by `table` (this table references others).
    pub fn local_keys(&self, table: &str) -> &[ForeignKey] {
        self.local.get(table).map_or(NO_KEYS, Vec::as_slice)
    }

    /// Foreign keys referencing `table` (others reference this table).
    pub fn remote_keys(&self, table: &str) -> &[ForeignKey] {
        self.remote.get(table).map_or(NO_KEYS, Vec::as_slice)
    }

    /// Whether `table.column` is the owning side of a foreign key.
    pub fn is_local_foreign_key(&self, table: &str, column: &str) -> bool {
        self.local_keys(table).iter().any(|key| key.column == column)
    }
}
