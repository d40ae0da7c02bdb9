use clap::Args;
use eyre::Result;

use super::SchemaArgs;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl InfoCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let (schema, path) = self.schema.load(config)?;

        let report = ops::info(&schema, &path);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
