//! The entgen.toml project file.
//!
//! Every setting is optional; an absent file or an empty table means the
//! Eloquent defaults. Command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use entgen_codegen::{GeneratorConfig, Indent, RenderOptions, TimestampFields};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --config to point at an entgen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration")]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Parsed entgen.toml settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub model: ModelSection,

    #[serde(default)]
    pub timestamps: TimestampsSection,

    #[serde(default)]
    pub relations: RelationsSection,

    #[serde(default)]
    pub format: FormatSection,
}

/// `[model]`: where the classes go and what they are called.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSection {
    /// Root namespace of the generated classes
    pub namespace: Option<String>,

    /// Class every base model extends
    pub base_class: Option<String>,

    /// Output directory for generated files
    pub output: Option<PathBuf>,

    /// Table-name prefix to strip from class and method names
    pub prefix: Option<String>,
}

/// `[timestamps]`: custom names for the framework-managed columns.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimestampsSection {
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub deleted_at: Option<String>,
}

/// `[relations]`: knobs for relationship derivation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationsSection {
    /// Only treat a table as a junction when its key pair carries foreign keys
    pub require_junction_foreign_keys: Option<bool>,

    /// Emit hasOne instead of hasMany when the owning column is unique
    pub hasone_from_unique: Option<bool>,
}

/// `[format]`: whitespace of the emitted source.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatSection {
    /// Either a number of spaces or the string "tab"
    pub indent: Option<IndentSetting>,

    /// Column at which long declarations wrap
    pub line_wrap: Option<usize>,

    /// Line ending style, "lf" or "crlf"
    pub newline: Option<NewlineSetting>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Spaces(u8),
    Style(IndentStyle),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tab,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineSetting {
    Lf,
    Crlf,
}

impl Config {
    /// Apply the file's settings on top of the built-in defaults.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();

        if let Some(namespace) = &self.model.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(base_class) = &self.model.base_class {
            config.base_class = base_class.clone();
        }
        if let Some(output) = &self.model.output {
            config.output_dir = output.clone();
        }
        if let Some(prefix) = &self.model.prefix {
            config.prefix = prefix.clone();
        }

        let defaults = TimestampFields::default();
        config.timestamp_fields = TimestampFields {
            created_at: self
                .timestamps
                .created_at
                .clone()
                .unwrap_or(defaults.created_at),
            updated_at: self
                .timestamps
                .updated_at
                .clone()
                .unwrap_or(defaults.updated_at),
            deleted_at: self
                .timestamps
                .deleted_at
                .clone()
                .unwrap_or(defaults.deleted_at),
        };

        if let Some(strict) = self.relations.require_junction_foreign_keys {
            config.require_junction_foreign_keys = strict;
        }
        if let Some(hasone) = self.relations.hasone_from_unique {
            config.hasone_from_unique = hasone;
        }

        let render_defaults = RenderOptions::default();
        config.render = RenderOptions {
            indent: match self.format.indent {
                Some(IndentSetting::Spaces(count)) => Indent::Spaces(count),
                Some(IndentSetting::Style(IndentStyle::Tab)) => Indent::Tab,
                None => render_defaults.indent,
            },
            newline: match self.format.newline {
                Some(NewlineSetting::Lf) => "\n",
                Some(NewlineSetting::Crlf) => "\r\n",
                None => render_defaults.newline,
            },
            line_wrap: self.format.line_wrap.unwrap_or(render_defaults.line_wrap),
        };

        config
    }
}

/// Represents an entgen.toml file with both raw content and parsed settings.
#[derive(Debug)]
pub struct EntgenToml {
    path: PathBuf,
    config: Config,
}

impl EntgenToml {
    /// Open and parse an entgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Self::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Parse settings from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                message: e.message().to_string(),
            })
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed settings.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = EntgenToml::from_str_with_filename("", "entgen.toml").unwrap();
        let generator = config.generator_config();

        assert_eq!(generator.namespace, "App");
        assert_eq!(generator.base_class, "\\Illuminate\\Database\\Eloquent\\Model");
        assert_eq!(generator.output_dir, PathBuf::from("models"));
        assert_eq!(generator.prefix, "");
        assert!(generator.require_junction_foreign_keys);
        assert!(generator.hasone_from_unique);
        assert_eq!(generator.render.line_wrap, 120);
    }

    #[test]
    fn test_full_file() {
        let content = r#"
            [model]
            namespace = "Acme\\Models"
            base_class = "\\Acme\\Record"
            output = "app/models"
            prefix = "wp_"

            [timestamps]
            created_at = "created"
            updated_at = "modified"

            [relations]
            require_junction_foreign_keys = false
            hasone_from_unique = false

            [format]
            indent = "tab"
            line_wrap = 100
            newline = "crlf"
        "#;
        let config = EntgenToml::from_str_with_filename(content, "entgen.toml").unwrap();
        let generator = config.generator_config();

        assert_eq!(generator.namespace, "Acme\\Models");
        assert_eq!(generator.base_class, "\\Acme\\Record");
        assert_eq!(generator.output_dir, PathBuf::from("app/models"));
        assert_eq!(generator.prefix, "wp_");
        assert_eq!(generator.timestamp_fields.created_at, "created");
        assert_eq!(generator.timestamp_fields.updated_at, "modified");
        assert_eq!(generator.timestamp_fields.deleted_at, "deleted_at");
        assert!(!generator.require_junction_foreign_keys);
        assert!(!generator.hasone_from_unique);
        assert_eq!(generator.render.indent, Indent::Tab);
        assert_eq!(generator.render.line_wrap, 100);
        assert_eq!(generator.render.newline, "\r\n");
    }

    #[test]
    fn test_numeric_indent() {
        let content = "[format]\nindent = 2\n";
        let config = EntgenToml::from_str_with_filename(content, "entgen.toml").unwrap();
        assert_eq!(config.generator_config().render.indent, Indent::Spaces(2));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let content = "[model]\nnamespase = \"App\"\n";
        let error = EntgenToml::from_str_with_filename(content, "entgen.toml").unwrap_err();
        assert!(matches!(*error, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let error = EntgenToml::open("does/not/exist/entgen.toml").unwrap_err();
        assert!(matches!(*error, ConfigError::Io { .. }));
    }
}
