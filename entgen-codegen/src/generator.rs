//! The generation driver.
//!
//! Walks every entity table of the schema model, resolves relations,
//! assembles and renders both documents, and writes them through the file
//! primitives. A single table's failure aborts the whole run: partial
//! regeneration across an interdependent schema is unsafe, so consumers
//! must treat an incomplete run as indeterminate and rerun from scratch.

use std::path::{Path, PathBuf};

use entgen_core::{FileRules, GeneratedFile, Overwrite, WriteResult};
use entgen_schema::{SchemaModel, Table};
use eyre::{Result, WrapErr};

use crate::assemble::assemble;
use crate::junction::is_junction;
use crate::relation::{ResolveOptions, resolve};
use crate::render::{render_base, render_extension};
use crate::template::{RenderOptions, TemplateSet};

/// Names of the framework-managed timestamp columns.
///
/// Explicit configuration with the Laravel defaults; a source without
/// custom names simply keeps the default mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFields {
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

impl Default for TimestampFields {
    fn default() -> Self {
        Self {
            created_at: "created_at".to_string(),
            updated_at: "updated_at".to_string(),
            deleted_at: "deleted_at".to_string(),
        }
    }
}

impl TimestampFields {
    /// Whether a column name is one of the timestamp hints.
    pub fn contains(&self, name: &str) -> bool {
        name == self.created_at || name == self.updated_at || name == self.deleted_at
    }
}

/// Everything the driver needs besides the schema itself.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root namespace of the generated models (e.g. "App").
    pub namespace: String,
    /// Class every base model extends, verbatim.
    pub base_class: String,
    pub output_dir: PathBuf,
    /// Table-name prefix to strip.
    pub prefix: String,
    pub timestamp_fields: TimestampFields,
    pub require_junction_foreign_keys: bool,
    pub hasone_from_unique: bool,
    pub render: RenderOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "App".to_string(),
            base_class: "\\Illuminate\\Database\\Eloquent\\Model".to_string(),
            output_dir: PathBuf::from("models"),
            prefix: String::new(),
            timestamp_fields: TimestampFields::default(),
            require_junction_foreign_keys: true,
            hasone_from_unique: true,
            render: RenderOptions::default(),
        }
    }
}

impl GeneratorConfig {
    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            prefix: self.prefix.clone(),
            hasone_from_unique: self.hasone_from_unique,
            require_junction_foreign_keys: self.require_junction_foreign_keys,
        }
    }
}

/// A rendered file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// One file written during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub written: Vec<WrittenFile>,
    /// Extension files left untouched because they already exist.
    pub skipped: Vec<PathBuf>,
    /// Junction tables excluded from generation.
    pub junctions: Vec<String>,
    /// Views reported by the source (not generated).
    pub views: Vec<String>,
}

struct ModelFile {
    relative: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl GeneratedFile for ModelFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// PHP model generator over a built schema model.
pub struct Generator<'a> {
    schema: &'a SchemaModel,
    config: &'a GeneratorConfig,
    templates: TemplateSet,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a SchemaModel, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            templates: TemplateSet::php(),
        }
    }

    /// Entity tables in listing order, and the junction tables set aside.
    fn partition_tables(&self) -> (Vec<&Table>, Vec<String>) {
        let mut entities = Vec::new();
        let mut junctions = Vec::new();
        for table in self.schema.tables() {
            if is_junction(table, self.schema, self.config.require_junction_foreign_keys) {
                junctions.push(table.name.clone());
            } else {
                entities.push(table);
            }
        }
        (entities, junctions)
    }

    fn files_for(&self, table: &Table) -> Result<(ModelFile, ModelFile)> {
        let relations = resolve(table, self.schema, &self.config.resolve_options());
        let model = assemble(table, self.schema, relations, self.config);

        let base = render_base(&model, &self.templates, &self.config.render)
            .wrap_err_with(|| format!("failed to render base model for table '{}'", table.name))?;
        let extension = render_extension(&model, &self.templates, &self.config.render)
            .wrap_err_with(|| format!("failed to render model for table '{}'", table.name))?;

        Ok((
            ModelFile {
                relative: PathBuf::from("Base").join(format!("{}.php", model.class)),
                content: base,
                overwrite: Overwrite::Always,
            },
            ModelFile {
                relative: PathBuf::from(format!("{}.php", model.class)),
                content: extension,
                overwrite: Overwrite::IfMissing,
            },
        ))
    }

    /// Render every file without touching the file system.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let (entities, _) = self.partition_tables();
        let mut files = Vec::new();
        for table in entities {
            let (base, extension) = self.files_for(table)?;
            files.push(PreviewFile {
                path: base.relative.display().to_string(),
                content: base.content,
            });
            files.push(PreviewFile {
                path: extension.relative.display().to_string(),
                content: extension.content,
            });
        }
        Ok(files)
    }

    /// Generate and write all models.
    ///
    /// The base document is always overwritten; the extension document is
    /// only created when absent, so user customizations survive.
    pub fn generate(&self) -> Result<GenerateReport> {
        let (entities, junctions) = self.partition_tables();
        let mut report = GenerateReport {
            junctions,
            views: self.schema.views().to_vec(),
            ..GenerateReport::default()
        };

        for table in entities {
            let (base, extension) = self.files_for(table)?;
            for file in [base, extension] {
                let path = file.path(&self.config.output_dir);
                let result = file
                    .write(&self.config.output_dir)
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                match result {
                    WriteResult::Written(bytes) => report.written.push(WrittenFile { path, bytes }),
                    WriteResult::Skipped => report.skipped.push(path),
                }
            }
        }

        Ok(report)
    }
}
