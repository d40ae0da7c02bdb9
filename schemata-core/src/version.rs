use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Identifier of one stored version of a schema, e.g. `7.4` or `7_4`.
///
/// Both `.` and `_` separate components. The components map one-to-one to
/// directories under the schema root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct SchemaVersion {
    components: Vec<String>,
}

impl TryFrom<String> for SchemaVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for SchemaVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl SchemaVersion {
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Relative directory holding this version's documents (`7.4` -> `7/4`).
    pub fn to_path(&self) -> PathBuf {
        self.components.iter().collect()
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("."))
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<String> = s.split(['.', '_']).map(str::to_string).collect();
        for part in &components {
            if part.is_empty() {
                return Err(format!("invalid version '{}', empty component", s));
            }
            if part.contains(['/', '\\']) {
                return Err(format!(
                    "invalid version '{}', components must not contain path separators",
                    s
                ));
            }
        }
        Ok(Self { components })
    }
}
