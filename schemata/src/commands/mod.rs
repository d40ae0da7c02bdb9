mod alter;
mod check;
mod completions;
mod generate;
mod info;

use std::path::{Path, PathBuf};

use alter::AlterCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::{GenerateCommand, HtmlCommand};
use info::InfoCommand;
use schemata_codegen::Artifact;
use schemata_core::OutputFile;
use schemata_schema::{Schema, SchemaLoader};

use crate::config::Config;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for schemata_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "schemata")]
#[command(version)]
#[command(about = "Generate DDL, migrations and documentation from versioned JSON schemas")]
pub(crate) struct Cli {
    /// Path to the project config
    #[arg(long, global = true, default_value = "schemata.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if let Commands::Completions(cmd) = &self.command {
            return cmd.run();
        }

        let config = Config::load(&self.config)?;
        match &self.command {
            Commands::Sql(cmd) => cmd.run(&config, Artifact::Sql),
            Commands::Cql(cmd) => cmd.run(&config, Artifact::Cql),
            Commands::Json(cmd) => cmd.run(&config, Artifact::Json),
            Commands::Native(cmd) => cmd.run(&config, Artifact::Native),
            Commands::Html(cmd) => cmd.run(&config),
            Commands::Alter(cmd) => cmd.run(&config),
            Commands::Check(cmd) => cmd.run(&config),
            Commands::Info(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a SQL CREATE TABLE statement
    Sql(GenerateCommand),

    /// Generate a CQL CREATE TABLE statement
    Cql(GenerateCommand),

    /// Print the schema document as JSON
    Json(GenerateCommand),

    /// Print the field name to native type mapping as JSON
    Native(GenerateCommand),

    /// Generate HTML documentation
    Html(HtmlCommand),

    /// Generate ALTER TABLE statements between two versions
    Alter(AlterCommand),

    /// Check that every field maps in every target
    Check(CheckCommand),

    /// Show a summary of a schema
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Which schema document to load
#[derive(Args)]
pub struct SchemaArgs {
    /// Schema (table) name
    pub name: String,

    /// Schema version (defaults to `default_version` in schemata.toml)
    #[arg(short = 's', long)]
    pub schema_version: Option<String>,

    /// Read the document from this file instead of the schema tree
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl SchemaArgs {
    /// Load the schema, returning it with the path it was read from.
    pub fn load(&self, config: &Config) -> Result<(Schema, PathBuf)> {
        let version = config.version(self.schema_version.as_deref())?;
        let loader = SchemaLoader::new(config.root());
        let schema = loader
            .load(&self.name, &version, self.file.as_deref())
            .unwrap_or_exit();
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| loader.resolve(&self.name, schema.version()));
        Ok((schema, path))
    }
}

/// Write `content` to `output` if given, otherwise print it.
pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            OutputFile::new(path, content).write()?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None if content.ends_with('\n') => print!("{}", content),
        None => println!("{}", content),
    }
    Ok(())
}
