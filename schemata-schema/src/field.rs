//! Fields and sections of a schema document.

use serde::{Deserialize, Deserializer, Serialize};

/// One column of a schema
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Field {
    /// Column name. Fields without a name take no part in DDL or diffs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Abstract type token, kept verbatim until a generator maps it
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Default value literal (SQL only)
    #[serde(
        default,
        deserialize_with = "deserialize_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<String>,

    /// Verbatim trailing DDL, e.g. `NOT NULL AUTO_INCREMENT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Field {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A named group of fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    #[serde(rename = "section")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Extended (optional add-on) content rather than core content
    #[serde(default)]
    pub ext: bool,

    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn is_core(&self) -> bool {
        !self.ext
    }
}

/// Accept a default written as a JSON string, number or boolean.
///
/// Strings are kept verbatim (they already carry dialect syntax such as
/// quotes); other scalars use their JSON text.
fn deserialize_literal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid default {}, expected a string, number or boolean",
            other
        ))),
    }
}
