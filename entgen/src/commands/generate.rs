use std::path::PathBuf;

use clap::Args;
use entgen_codegen::{Generator, GeneratorConfig};
use entgen_schema::{SchemaModel, SchemaSnapshot};
use eyre::Result;

use super::UnwrapOrExit;
use crate::config::{Config, EntgenToml};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema snapshot (defaults to ./schema.json)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Path to entgen.toml (defaults to ./entgen.toml, used when present)
    #[arg(short, long, default_value = "entgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root namespace of the generated classes
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Class the generated base models extend
    #[arg(long)]
    pub base_class: Option<String>,

    /// Table-name prefix to strip
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Preview generated models without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.effective_config();

        let snapshot = SchemaSnapshot::open(&self.schema).unwrap_or_exit();
        let schema = SchemaModel::build(&snapshot, &config.prefix).unwrap_or_exit();
        let generator = Generator::new(&schema, &config);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let report = generator.generate()?;

        for file in &report.written {
            println!("  + {} ({} bytes)", file.path.display(), file.bytes);
        }
        for path in &report.skipped {
            println!("  = {} (exists, left untouched)", path.display());
        }

        if !report.junctions.is_empty() {
            println!();
            println!("Junction tables (no model generated):");
            for name in &report.junctions {
                println!("  {}", name);
            }
        }
        if !report.views.is_empty() {
            println!();
            println!("Views (no model generated):");
            for name in &report.views {
                println!("  {}", name);
            }
        }

        println!();
        println!(
            "{} file{} written, {} skipped",
            report.written.len(),
            if report.written.len() == 1 { "" } else { "s" },
            report.skipped.len()
        );

        Ok(())
    }

    /// File settings, then command-line overrides on top.
    fn effective_config(&self) -> GeneratorConfig {
        let mut config = if self.config.exists() {
            EntgenToml::open(&self.config)
                .unwrap_or_exit()
                .config()
                .generator_config()
        } else {
            Config::default().generator_config()
        };

        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(base_class) = &self.base_class {
            config.base_class = base_class.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }

        config
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
