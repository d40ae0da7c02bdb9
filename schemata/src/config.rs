//! Settings read from `schemata.toml` and the environment.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, eyre};
use schemata_core::{NativeType, NativeTypeRegistry, SchemaVersion};
use serde::Deserialize;

/// Environment variable overriding `root`
pub const ROOT_ENV: &str = "SCHEMATA_ROOT";
/// Environment variable overriding `default_version`
pub const VERSION_ENV: &str = "SCHEMATA_VERSION";

/// Project settings
///
/// ```toml
/// root = "schema"
/// default_version = "7.4"
///
/// [native_types]
/// bigint = "integer"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the versioned schema tree
    pub root: Option<PathBuf>,

    /// Version used when a command is not given one
    pub default_version: Option<SchemaVersion>,

    /// Extra type tokens for the native mapping
    pub native_types: BTreeMap<String, NativeType>,
}

impl Config {
    /// Read the config file if it exists, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_path(path)?.with_overrides(
            std::env::var(ROOT_ENV).ok(),
            std::env::var(VERSION_ENV).ok(),
        )
    }

    /// Read the config file, falling back to defaults when it is missing.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::from_toml(&content).wrap_err_with(|| format!("invalid config '{}'", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace file values with the given overrides, when set.
    pub fn with_overrides(mut self, root: Option<String>, version: Option<String>) -> Result<Self> {
        if let Some(root) = root {
            self.root = Some(PathBuf::from(root));
        }
        if let Some(version) = version {
            let version = version
                .parse()
                .map_err(|e: String| eyre!(e))
                .wrap_err_with(|| format!("invalid {}", VERSION_ENV))?;
            self.default_version = Some(version);
        }
        Ok(self)
    }

    /// Schema root, defaulting to the current directory
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("."))
    }

    /// Pick the explicit version if given, otherwise the configured default.
    pub fn version(&self, explicit: Option<&str>) -> Result<String> {
        match (explicit, &self.default_version) {
            (Some(version), _) => Ok(version.to_string()),
            (None, Some(default)) => Ok(default.to_string()),
            (None, None) => Err(eyre!(
                "no schema version given; pass --schema-version or set default_version in schemata.toml"
            )),
        }
    }

    /// Native type registry with the configured extra tokens
    pub fn native_registry(&self) -> NativeTypeRegistry {
        let mut registry = NativeTypeRegistry::default();
        for (name, native) in &self.native_types {
            registry.register(name.clone(), *native);
        }
        registry
    }
}
