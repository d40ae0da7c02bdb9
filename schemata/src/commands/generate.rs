use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use schemata_codegen::{Artifact, HtmlOptions, render};

use super::{SchemaArgs, UnwrapOrExit, emit};
use crate::config::Config;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self, config: &Config, artifact: Artifact) -> Result<()> {
        let (schema, _) = self.schema.load(config)?;
        let content = render(&schema, artifact, &config.native_registry()).unwrap_or_exit();
        tracing::debug!(
            schema = schema.name(),
            version = %schema.version(),
            %artifact,
            bytes = content.len(),
            "rendered artifact"
        );

        let output = self.output.as_deref().map(|p| output_path(p, artifact));
        emit(&content, output.as_deref())
    }
}

#[derive(Args)]
pub struct HtmlCommand {
    #[command(flatten)]
    pub generate: GenerateCommand,

    /// Emit a fragment instead of a complete document
    #[arg(long)]
    pub no_headers: bool,

    /// Omit section headings and descriptions
    #[arg(long)]
    pub no_sections: bool,

    /// Document core sections only
    #[arg(long)]
    pub core_only: bool,
}

impl HtmlCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let options = HtmlOptions {
            headers: !self.no_headers,
            use_sections: !self.no_sections,
            include_ext: !self.core_only,
        };
        self.generate.run(config, Artifact::Html(options))
    }
}

/// Add the artifact's extension when the path has none.
fn output_path(path: &Path, artifact: Artifact) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(artifact.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_extension() {
        assert_eq!(
            output_path(Path::new("out/objects"), Artifact::Sql),
            Path::new("out/objects.sql")
        );
        assert_eq!(
            output_path(Path::new("out/objects"), Artifact::Native),
            Path::new("out/objects.json")
        );
        assert_eq!(
            output_path(Path::new("objects.ddl"), Artifact::Cql),
            Path::new("objects.ddl")
        );
    }
}
