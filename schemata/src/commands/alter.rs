use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use schemata_codegen::SchemaDiff;
use schemata_core::Dialect;
use schemata_schema::SchemaLoader;

use super::{UnwrapOrExit, emit};
use crate::config::Config;

#[derive(Args)]
pub struct AlterCommand {
    /// Schema (table) name
    pub name: String,

    /// Version to migrate from
    #[arg(long)]
    pub from: String,

    /// Version to migrate to
    #[arg(long)]
    pub to: String,

    /// Target dialect (sql or cql)
    #[arg(short, long, default_value = "sql")]
    pub dialect: Dialect,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl AlterCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let loader = SchemaLoader::new(config.root());
        let (old, new) = loader
            .load_pair(&self.name, &self.from, &self.to)
            .unwrap_or_exit();

        let diff = SchemaDiff::between(&old, &new);
        let ddl = diff.to_ddl(self.dialect).unwrap_or_exit();
        tracing::debug!(
            schema = new.name(),
            from = %old.version(),
            to = %new.version(),
            added = diff.added.len(),
            dropped = diff.dropped.len(),
            "computed schema diff"
        );

        // an empty migration still replaces any previous output file
        if diff.is_empty() && self.output.is_none() {
            eprintln!(
                "no columns added or dropped between {} and {}",
                old.version(),
                new.version()
            );
            return Ok(());
        }

        emit(&ddl, self.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;

    const V1: &str = r#"{"sections": [{"section": "core", "fields": [
        {"name": "id", "type": "long"}
    ]}]}"#;

    fn write_version(root: &Path, version: &[&str], content: &str) {
        let dir = version.iter().fold(root.to_path_buf(), |p, c| p.join(c));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("objects.json"), content).unwrap();
    }

    fn command(output: PathBuf) -> AlterCommand {
        AlterCommand {
            name: "objects".to_string(),
            from: "1.0".to_string(),
            to: "1.1".to_string(),
            dialect: Dialect::Sql,
            output: Some(output),
        }
    }

    #[test]
    fn test_empty_diff_replaces_previous_output() {
        let temp = TempDir::new().unwrap();
        write_version(temp.path(), &["1", "0"], V1);
        write_version(temp.path(), &["1", "1"], V1);

        let output = temp.path().join("out/migrate.sql");
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, "ALTER TABLE objects ADD `stale` int;\n").unwrap();

        let config = Config {
            root: Some(temp.path().to_path_buf()),
            ..Config::default()
        };
        command(output.clone()).run(&config).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_writes_migration() {
        let temp = TempDir::new().unwrap();
        write_version(temp.path(), &["1", "0"], V1);
        write_version(
            temp.path(),
            &["1", "1"],
            r#"{"sections": [{"section": "core", "fields": [
                {"name": "id", "type": "long"},
                {"name": "ra", "type": "double"}
            ]}]}"#,
        );

        let output = temp.path().join("migrate.sql");
        let config = Config {
            root: Some(temp.path().to_path_buf()),
            ..Config::default()
        };
        command(output.clone()).run(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "ALTER TABLE objects ADD `ra` double;\n"
        );
    }
}
