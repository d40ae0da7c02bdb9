//! Single entry point for rendering any artifact of one schema.

use std::fmt;

use schemata_core::{Dialect, NativeTypeRegistry};
use schemata_schema::{Result, Schema};

use crate::{
    ddl::create_table,
    html::{HtmlOptions, html},
};

/// An artifact derived from a single schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Sql,
    Cql,
    Html(HtmlOptions),
    Json,
    Native,
}

impl Artifact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Sql => "sql",
            Artifact::Cql => "cql",
            Artifact::Html(_) => "html",
            Artifact::Json => "json",
            Artifact::Native => "native",
        }
    }

    /// Conventional file extension for the artifact
    pub fn extension(&self) -> &'static str {
        match self {
            Artifact::Sql => "sql",
            Artifact::Cql => "cql",
            Artifact::Html(_) => "html",
            Artifact::Json | Artifact::Native => "json",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one artifact of a schema.
///
/// `registry` resolves field types for [`Artifact::Native`] and is ignored
/// otherwise.
pub fn render(schema: &Schema, artifact: Artifact, registry: &NativeTypeRegistry) -> Result<String> {
    match artifact {
        Artifact::Sql => create_table(schema, Dialect::Sql),
        Artifact::Cql => create_table(schema, Dialect::Cql),
        Artifact::Html(options) => Ok(html(schema, options)),
        Artifact::Json => Ok(schema.to_json()),
        Artifact::Native => schema.to_native_dict(registry)?.to_json(),
    }
}
