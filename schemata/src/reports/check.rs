//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from type mapping validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path the schema was read from.
    pub schema_path: PathBuf,
    /// Number of named fields checked.
    pub fields: usize,
    /// Mapping failures, prefixed with the target.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Fields a dialect cannot hold, when no dialect was required.
    pub notes: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for note in &self.notes {
            out.preformatted(&format!("note: {}", note));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.notes.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} field{})",
                self.schema_path.display(),
                self.fields,
                if self.fields == 1 { "" } else { "s" }
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} mapping error{}",
                self.schema_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
    }
}
