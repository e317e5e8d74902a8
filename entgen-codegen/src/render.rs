//! Turning a [`GeneratedModel`] into PHP source text.
//!
//! Rendering emits only deviations from Eloquent defaults: `$primaryKey`
//! when it is not `id`, `$timestamps = false` when no timestamp column was
//! found, `$incrementing = false` when the key does not auto-increment.
//! The `@property` doc block is column-aligned for readability; the
//! padding is cosmetic only.

use entgen_core::{implode_and_quote, single_quote};

use crate::assemble::GeneratedModel;
use crate::error::TemplateError;
use crate::relation::{Relation, RelationKind};
use crate::template::{RenderOptions, TemplateSet, TemplateValues, collapse_blank_runs};

/// Render the base document (always regenerated).
pub fn render_base(
    model: &GeneratedModel,
    templates: &TemplateSet,
    options: &RenderOptions,
) -> Result<String, TemplateError> {
    let indent = options.indent.as_str();

    let mut blocks: Vec<String> = Vec::new();

    let property = |visibility: &str, name: &str, value: &str| {
        templates.property.render(
            &TemplateValues::new()
                .set("i", indent)
                .set("visibility", visibility)
                .set("property", name)
                .set("value", value),
        )
    };

    blocks.push(property("protected", "table", &single_quote(&model.table))?);

    if let Some(primary_key) = &model.primary_key
        && primary_key != "id"
    {
        blocks.push(property("public", "primaryKey", &single_quote(primary_key))?);
    }
    if !model.timestamps {
        blocks.push(property("public", "timestamps", "false")?);
    }
    if !model.incrementing {
        blocks.push(property("public", "incrementing", "false")?);
    }

    let fillable = property("protected", "fillable", &php_array(&model.fillable))?;
    let wrap_break = format!("\n{}{}", indent, indent);
    blocks.push(word_wrap(&fillable, options.line_wrap, &wrap_break));

    if !model.hidden.is_empty() {
        blocks.push(property("protected", "hidden", &php_array(&model.hidden))?);
    }

    if !model.dates.is_empty() {
        blocks.push(templates.accessor.render(
            &TemplateValues::new()
                .set("i", indent)
                .set("accessor", "Dates")
                .set("value", php_array(&model.dates)),
        )?);
    }

    for relation in &model.relations {
        blocks.push(templates.relationship.render(
            &TemplateValues::new()
                .set("i", indent)
                .set("method_name", relation.method_name.as_str())
                .set("type", relation.kind.as_str())
                .set("arguments", relation_arguments(relation)),
        )?);
    }

    let mut class_body = blocks.join("\n\n");
    class_body.push('\n');

    let text = templates.model_base.render(
        &TemplateValues::new()
            .set(
                "namespace_line",
                namespace_line(&model.base_namespace()),
            )
            .set("class_name", model.class.as_str())
            .set("base_class", model.base_class.as_str())
            .set("field_docs", field_docs(model))
            .set("class_body", class_body),
    )?;

    Ok(finish(text, options))
}

/// Render the extension document (thin user-editable subclass).
pub fn render_extension(
    model: &GeneratedModel,
    templates: &TemplateSet,
    options: &RenderOptions,
) -> Result<String, TemplateError> {
    let text = templates.model.render(
        &TemplateValues::new()
            .set("namespace_line", namespace_line(&model.namespace))
            .set("class_name", model.class.as_str())
            .set("base_class", model.extension_base_class()),
    )?;

    Ok(finish(text, options))
}

fn finish(text: String, options: &RenderOptions) -> String {
    let text = collapse_blank_runs(&text);
    if options.newline == "\n" {
        text
    } else {
        text.replace('\n', options.newline)
    }
}

fn namespace_line(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("namespace {};\n\n", namespace)
    }
}

fn php_array(items: &[String]) -> String {
    format!("array({})", implode_and_quote(", ", items))
}

/// Arguments of the Eloquent relation call, in signature order per kind.
fn relation_arguments(relation: &Relation) -> String {
    let mut arguments = vec![relation.remote_class.clone()];
    match relation.kind {
        RelationKind::BelongsTo => {
            arguments.push(relation.local_field.clone());
            arguments.push(relation.remote_field.clone());
        }
        RelationKind::HasOne | RelationKind::HasMany => {
            arguments.push(relation.remote_field.clone());
            arguments.push(relation.local_field.clone());
        }
        RelationKind::BelongsToMany => {
            arguments.push(relation.junction_table.clone().unwrap_or_default());
            arguments.push(relation.local_field.clone());
            arguments.push(relation.remote_field.clone());
        }
    }
    implode_and_quote(", ", &arguments)
}

/// The `@property` doc block: fields in source order, then relations.
fn field_docs(model: &GeneratedModel) -> String {
    let relation_type = |relation: &Relation| {
        if relation.kind.is_plural() {
            format!("{}[]", relation.remote_class)
        } else {
            relation.remote_class.clone()
        }
    };

    let type_width = model
        .fields
        .iter()
        .map(|field| field.php_type.as_str().len())
        .chain(model.relations.iter().map(|r| relation_type(r).len()))
        .max()
        .unwrap_or(0);
    let name_width = model
        .fields
        .iter()
        .map(|field| field.name.len())
        .chain(model.relations.iter().map(|r| r.method_name.len()))
        .max()
        .unwrap_or(0);

    let mut docs = String::new();
    for field in &model.fields {
        let suffix = match &field.description {
            Some(description) => format!(" {}", description),
            None => String::new(),
        };
        docs.push_str(&format!(
            " * @property {:<type_width$} ${:<name_width$} [{}]{}\n",
            field.php_type.as_str(),
            field.name,
            field.raw_type,
            suffix,
        ));
    }
    for relation in &model.relations {
        // nothing follows the name, so no trailing padding
        docs.push_str(&format!(
            " * @property {:<type_width$} ${}\n",
            relation_type(relation),
            relation.method_name,
        ));
    }
    docs
}

/// Greedy word wrap at `width`, inserting `break_str` between words.
///
/// The continuation indent carried by `break_str` counts toward the width
/// so no emitted line exceeds the limit.
fn word_wrap(line: &str, width: usize, break_str: &str) -> String {
    if line.len() <= width {
        return line.to_string();
    }
    let continuation = break_str.trim_start_matches('\n').len();
    let mut out = String::new();
    let mut current = 0;
    for (index, word) in line.split(' ').enumerate() {
        if index == 0 {
            out.push_str(word);
            current = word.len();
        } else if current + 1 + word.len() > width {
            out.push_str(break_str);
            out.push_str(word);
            current = continuation + word.len();
        } else {
            out.push(' ');
            out.push_str(word);
            current += 1 + word.len();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use entgen_core::PhpType;

    use super::*;
    use crate::assemble::FieldDecl;

    fn user_model() -> GeneratedModel {
        GeneratedModel {
            namespace: "App".to_string(),
            class: "User".to_string(),
            base_class: "\\Illuminate\\Database\\Eloquent\\Model".to_string(),
            table: "users".to_string(),
            primary_key: Some("id".to_string()),
            incrementing: true,
            timestamps: true,
            fillable: vec!["name".to_string()],
            hidden: vec![],
            dates: vec![],
            fields: vec![FieldDecl {
                name: "name".to_string(),
                php_type: PhpType::String,
                raw_type: "varchar(255)".to_string(),
                description: Some("255 characters".to_string()),
            }],
            relations: vec![Relation {
                kind: RelationKind::HasMany,
                local_field: "id".to_string(),
                remote_field: "user_id".to_string(),
                remote_class: "Post".to_string(),
                method_name: "posts".to_string(),
                junction_table: None,
            }],
        }
    }

    #[test]
    fn test_render_base_full_document() {
        let text = render_base(
            &user_model(),
            &TemplateSet::php(),
            &RenderOptions::default(),
        )
        .unwrap();

        let expected = "<?php\n\n\
            namespace App\\Base;\n\n\
            /**\n\
            \x20* Class User\n\
            \x20*\n\
            \x20* @property string $name  [varchar(255)] 255 characters\n\
            \x20* @property Post[] $posts\n\
            \x20*/\n\
            class User extends \\Illuminate\\Database\\Eloquent\\Model\n\
            {\n\
            \x20   protected $table = 'users';\n\n\
            \x20   protected $fillable = array('name');\n\n\
            \x20   public function posts()\n\
            \x20   {\n\
            \x20       return $this->hasMany('Post', 'user_id', 'id');\n\
            \x20   }\n\
            }\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_extension() {
        let text = render_extension(
            &user_model(),
            &TemplateSet::php(),
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(
            text,
            "<?php\n\nnamespace App;\n\nclass User extends \\App\\Base\\User\n{\n}\n"
        );
    }

    #[test]
    fn test_deviations_only_when_defaults_hold() {
        let text = render_base(
            &user_model(),
            &TemplateSet::php(),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(!text.contains("$primaryKey"));
        assert!(!text.contains("$timestamps"));
        assert!(!text.contains("$incrementing"));
        assert!(!text.contains("$hidden"));
    }

    #[test]
    fn test_deviations_emitted_when_defaults_do_not_hold() {
        let mut model = user_model();
        model.primary_key = Some("uuid".to_string());
        model.incrementing = false;
        model.timestamps = false;
        model.hidden = vec!["password".to_string()];

        let text = render_base(&model, &TemplateSet::php(), &RenderOptions::default()).unwrap();
        assert!(text.contains("public $primaryKey = 'uuid';"));
        assert!(text.contains("public $timestamps = false;"));
        assert!(text.contains("public $incrementing = false;"));
        assert!(text.contains("protected $hidden = array('password');"));
    }

    #[test]
    fn test_dates_accessor() {
        let mut model = user_model();
        model.dates = vec!["birthday".to_string()];

        let text = render_base(&model, &TemplateSet::php(), &RenderOptions::default()).unwrap();
        assert!(text.contains(
            "    public function getDates()\n    {\n        return array('birthday');\n    }"
        ));
    }

    #[test]
    fn test_belongs_to_many_arguments_include_junction() {
        let relation = Relation {
            kind: RelationKind::BelongsToMany,
            local_field: "id".to_string(),
            remote_field: "id".to_string(),
            remote_class: "Role".to_string(),
            method_name: "roles".to_string(),
            junction_table: Some("role_user".to_string()),
        };
        assert_eq!(
            relation_arguments(&relation),
            "'Role', 'role_user', 'id', 'id'"
        );
    }

    #[test]
    fn test_long_fillable_wraps() {
        let mut model = user_model();
        model.fillable = (0..20).map(|n| format!("field_number_{}", n)).collect();

        let text = render_base(&model, &TemplateSet::php(), &RenderOptions::default()).unwrap();
        let fillable_lines: Vec<&str> = text
            .lines()
            .filter(|line| line.contains("field_number_") || line.contains("$fillable"))
            .collect();
        assert!(fillable_lines.len() > 1);
        for line in fillable_lines {
            assert!(line.len() <= 120, "line too long: {}", line);
        }
    }

    #[test]
    fn test_no_triple_blank_lines() {
        let text = render_base(
            &user_model(),
            &TemplateSet::php(),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_crlf_newlines() {
        let options = RenderOptions {
            newline: "\r\n",
            ..RenderOptions::default()
        };
        let text = render_extension(&user_model(), &TemplateSet::php(), &options).unwrap();
        assert!(text.contains("\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }
}
