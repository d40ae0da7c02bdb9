use clap::Args;
use eyre::Result;
use schemata_core::Dialect;

use super::SchemaArgs;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Require every field to map in this dialect (sql or cql)
    #[arg(short, long)]
    pub dialect: Option<Dialect>,
}

impl CheckCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let (schema, path) = self.schema.load(config)?;

        let report = ops::check(&schema, &path, &config.native_registry(), self.dialect);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
