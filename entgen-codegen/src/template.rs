//! Placeholder-substitution templates.
//!
//! A template is an ordered sequence of literal text and named slots
//! (`{{name}}`); rendering substitutes each slot and concatenates. This
//! keeps "compute the model" and "turn it into text" strictly separate.

use std::collections::HashMap;

use crate::error::TemplateError;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, per PSR-2.
    pub const PHP: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}

/// Formatting knobs for the rendering step.
///
/// Explicit configuration instead of process-wide constants: indentation,
/// line separator, and the soft wrap width for long property lines.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub indent: Indent,
    pub newline: &'static str,
    /// Soft line-length limit, per PSR-2.
    pub line_wrap: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::PHP,
            newline: "\n",
            line_wrap: 120,
        }
    }
}

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot(String),
}

/// A compiled placeholder template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile template text, splitting `{{name}}` slots from literals.
    ///
    /// An unterminated `{{` is kept as literal text.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(open) = rest.find("{{") {
            let Some(close) = rest[open..].find("}}") else {
                break;
            };
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            segments.push(Segment::Slot(rest[open + 2..open + close].to_string()));
            rest = &rest[open + close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute every slot and concatenate.
    pub fn render(&self, values: &TemplateValues) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(TemplateError::MissingValue { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Named slot values for one render.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    values: HashMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Collapse triple-newline runs left behind by empty template sections.
pub fn collapse_blank_runs(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("\n\n\n") {
        out = out.replace("\n\n\n", "\n\n");
    }
    out
}

const MODEL_BASE_TEMPLATE: &str = "<?php\n\n{{namespace_line}}/**\n * Class {{class_name}}\n *\n{{field_docs}} */\nclass {{class_name}} extends {{base_class}}\n{\n{{class_body}}}\n";

const MODEL_TEMPLATE: &str =
    "<?php\n\n{{namespace_line}}class {{class_name}} extends {{base_class}}\n{\n}\n";

const PROPERTY_TEMPLATE: &str = "{{i}}{{visibility}} ${{property}} = {{value}};";

const ACCESSOR_TEMPLATE: &str =
    "{{i}}public function get{{accessor}}()\n{{i}}{\n{{i}}{{i}}return {{value}};\n{{i}}}";

const RELATIONSHIP_TEMPLATE: &str = "{{i}}public function {{method_name}}()\n{{i}}{\n{{i}}{{i}}return $this->{{type}}({{arguments}});\n{{i}}}";

/// The bundled templates for one target flavor.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub model_base: Template,
    pub model: Template,
    pub property: Template,
    pub accessor: Template,
    pub relationship: Template,
}

impl TemplateSet {
    /// The built-in Eloquent/PHP template set.
    pub fn php() -> Self {
        Self {
            model_base: Template::parse(MODEL_BASE_TEMPLATE),
            model: Template::parse(MODEL_TEMPLATE),
            property: Template::parse(PROPERTY_TEMPLATE),
            accessor: Template::parse(ACCESSOR_TEMPLATE),
            relationship: Template::parse(RELATIONSHIP_TEMPLATE),
        }
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::php()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let template = Template::parse("a {{b}} c");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("a ".to_string()),
                Segment::Slot("b".to_string()),
                Segment::Literal(" c".to_string()),
            ]
        );
    }

    #[test]
    fn test_render() {
        let template = Template::parse("Hello {{name}}!");
        let values = TemplateValues::new().set("name", "world");
        assert_eq!(template.render(&values).unwrap(), "Hello world!");
    }

    #[test]
    fn test_repeated_slot() {
        let template = Template::parse("{{i}}a\n{{i}}{{i}}b");
        let values = TemplateValues::new().set("i", "    ");
        assert_eq!(template.render(&values).unwrap(), "    a\n        b");
    }

    #[test]
    fn test_missing_value() {
        let template = Template::parse("{{name}}");
        let error = template.render(&TemplateValues::new()).unwrap_err();
        assert_eq!(
            error,
            TemplateError::MissingValue {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn test_unterminated_slot_is_literal() {
        let template = Template::parse("a {{b");
        assert_eq!(
            template.render(&TemplateValues::new()).unwrap(),
            "a {{b".to_string()
        );
    }

    #[test]
    fn test_collapse_blank_runs() {
        assert_eq!(collapse_blank_runs("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_runs("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_runs("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_php_set_parses() {
        let set = TemplateSet::php();
        assert!(
            set.model_base
                .segments()
                .iter()
                .any(|segment| matches!(segment, Segment::Slot(name) if name == "class_body"))
        );
    }
}
