//! Relationship derivation from the foreign-key graph.

use entgen_core::remove_prefix;
use entgen_schema::{Column, SchemaModel, Table};

use crate::junction::is_junction;
use crate::naming::{class_name, method_name};

/// Relationship cardinality.
///
/// The variant order is the fixed group order of generated accessor
/// methods; within a group, relations keep discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelationKind {
    BelongsToMany,
    HasOne,
    BelongsTo,
    HasMany,
}

impl RelationKind {
    /// The Eloquent method this relation calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::BelongsToMany => "belongsToMany",
            RelationKind::HasOne => "hasOne",
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::HasMany => "hasMany",
        }
    }

    /// Whether the accessor returns a collection.
    pub fn is_plural(&self) -> bool {
        matches!(self, RelationKind::BelongsToMany | RelationKind::HasMany)
    }
}

/// One derived relationship of an entity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    /// Key column on the table owning the accessor.
    pub local_field: String,
    /// Key column on the far side.
    pub remote_field: String,
    /// Class name of the related model.
    pub remote_class: String,
    /// Accessor method name.
    pub method_name: String,
    /// Pivot table for belongsToMany, prefix-stripped.
    pub junction_table: Option<String>,
}

/// Knobs for relation derivation.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub prefix: String,
    /// Treat a unique owning column as a one-to-one (`hasOne`) relation.
    pub hasone_from_unique: bool,
    /// Junction detection strictness, see [`is_junction`].
    pub require_junction_foreign_keys: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            hasone_from_unique: true,
            require_junction_foreign_keys: true,
        }
    }
}

/// Derive all relationships of `table` from the foreign-key graph.
///
/// Local foreign keys become `belongsTo`. Incoming foreign keys become
/// `hasMany` (or `hasOne` when the owning column is unique) — unless the
/// owner is a junction table, in which case each of the junction's other
/// foreign keys contributes a `belongsToMany` through it. The schema model
/// is never mutated.
pub fn resolve(table: &Table, schema: &SchemaModel, options: &ResolveOptions) -> Vec<Relation> {
    let prefix = options.prefix.as_str();
    let mut relations = Vec::new();

    for key in schema.local_keys(&table.name) {
        relations.push(Relation {
            kind: RelationKind::BelongsTo,
            local_field: key.column.clone(),
            remote_field: key.referenced_column.clone(),
            remote_class: class_name(&key.referenced_table, prefix),
            method_name: method_name(&key.referenced_table, prefix, false),
            junction_table: None,
        });
    }

    for key in schema.remote_keys(&table.name) {
        let Some(owner) = schema.table(&key.table) else {
            // foreign key from outside the prefixed scope
            continue;
        };

        if is_junction(owner, schema, options.require_junction_foreign_keys) {
            for other in schema.local_keys(&owner.name) {
                if other == key {
                    continue;
                }
                relations.push(Relation {
                    kind: RelationKind::BelongsToMany,
                    local_field: key.referenced_column.clone(),
                    remote_field: other.referenced_column.clone(),
                    remote_class: class_name(&other.referenced_table, prefix),
                    method_name: method_name(&other.referenced_table, prefix, true),
                    junction_table: Some(remove_prefix(&owner.name, prefix)),
                });
            }
        } else {
            let one_to_one = options.hasone_from_unique
                && owner.column(&key.column).is_some_and(Column::is_unique);
            let kind = if one_to_one {
                RelationKind::HasOne
            } else {
                RelationKind::HasMany
            };
            relations.push(Relation {
                kind,
                local_field: key.referenced_column.clone(),
                remote_field: key.column.clone(),
                remote_class: class_name(&key.table, prefix),
                method_name: method_name(&key.table, prefix, kind.is_plural()),
                junction_table: None,
            });
        }
    }

    // stable: discovery order survives within each kind group
    relations.sort_by_key(|relation| relation.kind);
    relations
}
