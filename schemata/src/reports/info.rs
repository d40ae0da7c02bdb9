//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a schema summary.
#[derive(Debug)]
pub struct InfoReport {
    /// Schema (table) name.
    pub name: String,
    /// Schema version.
    pub version: String,
    /// Path the schema was read from.
    pub schema_path: PathBuf,
    /// Fields in core sections.
    pub core_fields: usize,
    /// Fields in extended sections.
    pub ext_fields: usize,
    /// Sections in document order.
    pub sections: Vec<SectionInfo>,
    /// Index clauses.
    pub indexes: Vec<String>,
    /// CQL table options.
    pub with_clause: Option<String>,
}

#[derive(Debug)]
pub struct SectionInfo {
    pub name: String,
    pub ext: bool,
    pub fields: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        out.section(&self.name);
        out.key_value_indented("Version", &self.version);
        out.key_value_indented("Source", &self.schema_path.display().to_string());
        out.key_value_indented(
            "Fields",
            &format!(
                "{} ({} core, {} ext)",
                self.core_fields + self.ext_fields,
                self.core_fields,
                self.ext_fields
            ),
        );
        out.newline();

        out.section("Sections");
        for section in &self.sections {
            let kind = if section.ext { "ext" } else { "core" };
            out.list_item(&format!("{} [{}] {}", section.name, kind, section.fields));
        }
        out.newline();

        if !self.indexes.is_empty() {
            out.section("Indexes");
            for index in &self.indexes {
                out.list_item(index);
            }
            out.newline();
        }

        if let Some(with) = &self.with_clause {
            out.section("CQL options");
            out.preformatted(&format!("  {}", with));
            out.newline();
        }
    }
}
