//! The schema model: one loaded version of one named schema.

use schemata_core::{NativeType, NativeTypeRegistry, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::{Error, SourceContext},
    field::{Field, Section},
};

/// Layout of a schema document on disk
#[derive(Debug, Deserialize)]
struct Document {
    sections: Vec<Section>,
    #[serde(default)]
    indexes: Vec<String>,
    #[serde(default)]
    with: Option<String>,
}

/// One version of a named schema.
///
/// A `Schema` is built once from its document and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    version: SchemaVersion,
    sections: Vec<Section>,
    indexes: Vec<String>,
    with: Option<String>,
    raw: serde_json::Value,
}

impl Schema {
    /// Parse a schema document held in memory.
    pub fn from_json(name: &str, version: &str, content: &str) -> Result<Self> {
        Self::from_str_with_filename(name, version, content, &format!("{name}.json"))
    }

    /// Parse a schema document with a custom filename for error reporting.
    pub fn from_str_with_filename(
        name: &str,
        version: &str,
        content: &str,
        filename: &str,
    ) -> Result<Self> {
        let version: SchemaVersion = version.parse().map_err(Error::invalid_version)?;
        let ctx = SourceContext::new(content, filename);

        let raw: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ctx.malformed(e))?;
        if !raw.is_object() {
            return Err(ctx.malformed(serde::de::Error::custom(
                "schema document must be a JSON object",
            )));
        }
        let document: Document = serde_json::from_str(content).map_err(|e| ctx.malformed(e))?;

        Ok(Self {
            name: name.to_string(),
            version,
            sections: document.sections,
            indexes: document.indexes,
            with: document.with,
            raw,
        })
    }

    /// Logical table name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &SchemaVersion {
        &self.version
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn core_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.ext)
    }

    pub fn ext_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.ext)
    }

    /// All fields, in section order then field order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| &s.fields)
    }

    pub fn core_fields(&self) -> impl Iterator<Item = &Field> {
        self.core_sections().flat_map(|s| &s.fields)
    }

    pub fn ext_fields(&self) -> impl Iterator<Item = &Field> {
        self.ext_sections().flat_map(|s| &s.fields)
    }

    /// Verbatim index definitions appended to CREATE TABLE
    pub fn indexes(&self) -> &[String] {
        &self.indexes
    }

    /// Verbatim clause appended after a CQL CREATE TABLE
    pub fn with_clause(&self) -> Option<&str> {
        self.with.as_deref()
    }

    /// Map every field to its native type.
    pub fn to_native_dict(&self, registry: &NativeTypeRegistry) -> Result<NativeDict> {
        let fields = self
            .fields()
            .map(|field| -> Result<NativeField> {
                Ok(NativeField {
                    name: field.name.clone(),
                    ty: registry.resolve(&field.ty)?,
                    doc: field.doc.clone(),
                    extra: field.extra.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(NativeDict { fields })
    }

    /// The loaded document as pretty-printed JSON (2-space indent)
    pub fn to_json(&self) -> String {
        format!("{:#}", self.raw)
    }
}

/// Native view of a schema, see [`Schema::to_native_dict`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeDict {
    pub fields: Vec<NativeField>,
}

impl NativeDict {
    /// Pretty-printed JSON form, with types written as Rust type names
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialize("native mapping", e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeField {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: NativeType,
    pub doc: Option<String>,
    pub extra: Option<String>,
}
