//! Locating and reading schema documents.

use std::path::{Path, PathBuf};

use schemata_core::SchemaVersion;
use tracing::debug;

use crate::{Error, Result, Schema};

/// Loads schema documents from a directory tree.
///
/// Documents live at `<root>/<version>/<name>.json`, where each `.` or `_`
/// separated component of the version is one directory level, so version
/// `7.4` of `objects` is read from `<root>/7/4/objects.json`.
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    root: PathBuf,
}

impl SchemaLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of a schema document under the root
    pub fn resolve(&self, name: &str, version: &SchemaVersion) -> PathBuf {
        self.root
            .join(version.to_path())
            .join(format!("{}.json", name))
    }

    /// Load one version of a schema.
    ///
    /// `explicit_path` bypasses the version lookup and reads that file instead.
    pub fn load(&self, name: &str, version: &str, explicit_path: Option<&Path>) -> Result<Schema> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => {
                let version: SchemaVersion = version.parse().map_err(Error::invalid_version)?;
                self.resolve(name, &version)
            }
        };
        debug!(schema = name, %version, path = %path.display(), "loading schema");

        let content = std::fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
        let schema =
            Schema::from_str_with_filename(name, version, &content, &path.display().to_string())?;

        debug!(
            schema = name,
            %version,
            sections = schema.sections().len(),
            fields = schema.fields().count(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Load two versions of one schema, typically to diff them
    pub fn load_pair(&self, name: &str, old: &str, new: &str) -> Result<(Schema, Schema)> {
        Ok((self.load(name, old, None)?, self.load(name, new, None)?))
    }
}
