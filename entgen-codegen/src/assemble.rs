//! Column classification and model assembly.

use entgen_core::{PhpType, remove_prefix};
use entgen_schema::{SchemaModel, Table};

use crate::generator::GeneratorConfig;
use crate::naming::class_name;
use crate::relation::Relation;

/// One fillable column, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub php_type: PhpType,
    pub raw_type: String,
    pub description: Option<String>,
}

/// The fully-resolved intermediate representation of one model.
///
/// Everything the templates need is captured here; rendering performs no
/// further schema lookups.
#[derive(Debug, Clone)]
pub struct GeneratedModel {
    /// Root namespace (e.g. "App"); the base document lives in `<ns>\Base`.
    pub namespace: String,
    pub class: String,
    /// Base class the base document extends, verbatim.
    pub base_class: String,
    /// Table name with the configured prefix stripped.
    pub table: String,
    pub primary_key: Option<String>,
    pub incrementing: bool,
    pub timestamps: bool,
    pub fillable: Vec<String>,
    pub hidden: Vec<String>,
    pub dates: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub relations: Vec<Relation>,
}

impl GeneratedModel {
    /// Namespace of the base document.
    pub fn base_namespace(&self) -> String {
        if self.namespace.is_empty() {
            "Base".to_string()
        } else {
            format!("{}\\Base", self.namespace)
        }
    }

    /// Fully-qualified base class of the extension document.
    pub fn extension_base_class(&self) -> String {
        format!("\\{}\\{}", self.base_namespace(), self.class)
    }
}

fn is_hidden_comment(comment: &str) -> bool {
    comment.contains("hidden") || comment.contains("secret")
}

/// Classify the columns of `table` and combine them with its resolved
/// relations into a [`GeneratedModel`].
///
/// Columns are visited in source order; the first matching rule wins:
/// primary key, timestamp hint, date-like (non-exclusive), hidden comment,
/// local foreign key, plain fillable field.
pub fn assemble(
    table: &Table,
    schema: &SchemaModel,
    relations: Vec<Relation>,
    config: &GeneratorConfig,
) -> GeneratedModel {
    let mut model = GeneratedModel {
        namespace: config.namespace.clone(),
        class: class_name(&table.name, &config.prefix),
        base_class: config.base_class.clone(),
        table: remove_prefix(&table.name, &config.prefix),
        primary_key: None,
        incrementing: false,
        timestamps: false,
        fillable: Vec::new(),
        hidden: Vec::new(),
        dates: Vec::new(),
        fields: Vec::new(),
        relations,
    };

    for column in &table.columns {
        if column.is_primary() {
            model.primary_key = Some(column.name.clone());
            model.incrementing = column.is_auto_increment();
            continue;
        }

        if config.timestamp_fields.contains(&column.name) {
            model.timestamps = true;
            continue;
        }

        let column_type = column.column_type();
        if column_type.is_date_like() {
            model.dates.push(column.name.clone());
        }

        if is_hidden_comment(&column.comment) {
            model.hidden.push(column.name.clone());
            continue;
        }

        if schema.is_local_foreign_key(&table.name, &column.name) {
            continue;
        }

        model.fillable.push(column.name.clone());
        model.fields.push(FieldDecl {
            name: column.name.clone(),
            php_type: column_type.php_type(),
            raw_type: column.raw_type.clone(),
            description: column_type.description(),
        });
    }

    model
}

#[cfg(test)]
mod tests {
    use entgen_schema::{SchemaModel, SchemaSnapshot};

    use super::*;
    use crate::relation::{ResolveOptions, resolve};

    const USERS: &str = r#"
    {
        "tables": [
            {"name": "users", "columns": [
                {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"},
                {"name": "name", "type": "varchar(255)"},
                {"name": "password", "type": "varchar(60)", "comment": "hidden from serialization"},
                {"name": "birthday", "type": "date"},
                {"name": "team_id", "type": "int(10) unsigned", "key": "MUL"},
                {"name": "created_at", "type": "timestamp"},
                {"name": "updated_at", "type": "timestamp"}
            ]},
            {"name": "teams", "columns": [
                {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"}
            ]}
        ],
        "foreign_keys": [
            {"table": "users", "column": "team_id", "referenced_table": "teams", "referenced_column": "id"}
        ]
    }
    "#;

    fn users_model() -> GeneratedModel {
        let snapshot = SchemaSnapshot::from_str_with_filename(USERS, "schema.json").unwrap();
        let schema = SchemaModel::build(&snapshot, "").unwrap();
        let table = schema.table("users").unwrap();
        let relations = resolve(table, &schema, &ResolveOptions::default());
        assemble(table, &schema, relations, &GeneratorConfig::default())
    }

    #[test]
    fn test_primary_key_captured_and_excluded() {
        let model = users_model();
        assert_eq!(model.primary_key.as_deref(), Some("id"));
        assert!(model.incrementing);
        assert!(!model.fillable.contains(&"id".to_string()));
        assert!(!model.hidden.contains(&"id".to_string()));
        assert!(!model.dates.contains(&"id".to_string()));
    }

    #[test]
    fn test_timestamp_columns_set_flag_and_are_excluded() {
        let model = users_model();
        assert!(model.timestamps);
        assert!(!model.fillable.contains(&"created_at".to_string()));
        assert!(!model.dates.contains(&"created_at".to_string()));
    }

    #[test]
    fn test_hidden_column_not_fillable() {
        let model = users_model();
        assert_eq!(model.hidden, vec!["password"]);
        assert!(!model.fillable.contains(&"password".to_string()));
    }

    #[test]
    fn test_date_column_is_both_date_and_fillable() {
        let model = users_model();
        assert_eq!(model.dates, vec!["birthday"]);
        assert!(model.fillable.contains(&"birthday".to_string()));
    }

    #[test]
    fn test_local_foreign_key_excluded_but_related() {
        let model = users_model();
        assert!(!model.fillable.contains(&"team_id".to_string()));

        // represented through the belongsTo relation instead
        assert_eq!(model.relations.len(), 1);
        assert_eq!(model.relations[0].local_field, "team_id");
        assert_eq!(model.relations[0].remote_field, "id");
    }

    #[test]
    fn test_field_order_follows_source_order() {
        let model = users_model();
        let names: Vec<_> = model.fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, vec!["name", "birthday"]);
        assert_eq!(model.fillable, vec!["name", "birthday"]);
    }

    #[test]
    fn test_namespaces() {
        let model = users_model();
        assert_eq!(model.base_namespace(), "App\\Base");
        assert_eq!(model.extension_base_class(), "\\App\\Base\\User");
    }
}
