use std::path::PathBuf;

use clap::Args;
use entgen_codegen::{GeneratorConfig, ResolveOptions, class_name, is_junction, resolve};
use entgen_schema::{SchemaModel, SchemaSnapshot};
use eyre::Result;

use super::UnwrapOrExit;
use crate::config::{Config, EntgenToml};

#[derive(Args)]
pub struct InspectCommand {
    /// Path to the schema snapshot (defaults to ./schema.json)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Path to entgen.toml (defaults to ./entgen.toml, used when present)
    #[arg(short, long, default_value = "entgen.toml")]
    pub config: PathBuf,

    /// Table-name prefix to strip
    #[arg(short, long)]
    pub prefix: Option<String>,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let mut config = if self.config.exists() {
            EntgenToml::open(&self.config)
                .unwrap_or_exit()
                .config()
                .generator_config()
        } else {
            Config::default().generator_config()
        };
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }

        let snapshot = SchemaSnapshot::open(&self.schema).unwrap_or_exit();
        let schema = SchemaModel::build(&snapshot, &config.prefix).unwrap_or_exit();

        Self::print_summary(&schema, &config);

        Ok(())
    }

    fn print_summary(schema: &SchemaModel, config: &GeneratorConfig) {
        let options = ResolveOptions {
            prefix: config.prefix.clone(),
            hasone_from_unique: config.hasone_from_unique,
            require_junction_foreign_keys: config.require_junction_foreign_keys,
        };

        let mut entities = Vec::new();
        let mut junctions = Vec::new();
        for table in schema.tables() {
            if is_junction(table, schema, config.require_junction_foreign_keys) {
                junctions.push(table.name.as_str());
            } else {
                entities.push(table);
            }
        }

        println!(
            "{} model{}, {} junction table{}, {} view{}",
            entities.len(),
            if entities.len() == 1 { "" } else { "s" },
            junctions.len(),
            if junctions.len() == 1 { "" } else { "s" },
            schema.views().len(),
            if schema.views().len() == 1 { "" } else { "s" }
        );

        for table in entities {
            println!();
            println!(
                "{} ({} columns) -> {}",
                table.name,
                table.columns.len(),
                class_name(&table.name, &config.prefix)
            );
            for relation in resolve(table, schema, &options) {
                match &relation.junction_table {
                    Some(junction) => println!(
                        "  {} {} (via {})",
                        relation.kind.as_str(),
                        relation.method_name,
                        junction
                    ),
                    None => println!("  {} {}", relation.kind.as_str(), relation.method_name),
                }
            }
        }

        if !junctions.is_empty() {
            println!();
            println!("Junction tables:");
            for name in &junctions {
                println!("  {}", name);
            }
        }
        if !schema.views().is_empty() {
            println!();
            println!("Views:");
            for name in schema.views() {
                println!("  {}", name);
            }
        }
    }
}
