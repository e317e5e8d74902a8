//! Many-to-many junction table detection.

use entgen_core::PhpType;
use entgen_schema::{SchemaModel, Table};

/// Classify a table as a many-to-many junction.
///
/// A junction has fewer than 3 columns, exactly two of which are
/// integer-typed primary keys; with `require_foreign_key` those two must
/// also each be a local foreign key of the table. Such a table carries no
/// entity identity of its own and never gets a generated model — it only
/// appears as the pivot of `belongsToMany` relations.
pub fn is_junction(table: &Table, schema: &SchemaModel, require_foreign_key: bool) -> bool {
    if table.columns.len() >= 3 {
        return false;
    }

    let mut count = 0;
    for column in &table.columns {
        if column.column_type().php_type() != PhpType::Int || !column.is_primary() {
            continue;
        }
        if require_foreign_key && !schema.is_local_foreign_key(&table.name, &column.name) {
            continue;
        }
        count += 1;
    }
    count == 2
}
