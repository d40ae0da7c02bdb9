//! Check operation - type mapping validation.

use std::path::Path;

use schemata_core::{Dialect, NativeTypeRegistry};
use schemata_schema::Schema;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Every named field must resolve through the native registry. With a
/// `dialect`, it must also map to a column type of that dialect. Without
/// one, fields a dialect cannot hold are listed as notes for that target.
pub fn check(
    schema: &Schema,
    path: &Path,
    registry: &NativeTypeRegistry,
    dialect: Option<Dialect>,
) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut notes = Vec::new();
    let mut fields = 0;

    let targets = match dialect {
        Some(dialect) => vec![dialect],
        None => vec![Dialect::Sql, Dialect::Cql],
    };

    for section in schema.sections() {
        for field in &section.fields {
            let Some(name) = field.name() else {
                warnings.push(format!(
                    "unnamed field of type '{}' in section '{}' is skipped",
                    field.ty, section.name
                ));
                continue;
            };
            fields += 1;

            for target in &targets {
                if let Err(e) = target.mapper().map_type(&field.ty) {
                    let msg = format!("{}: field '{}': {}", target, name, e);
                    if dialect.is_some() {
                        errors.push(msg);
                    } else {
                        notes.push(msg);
                    }
                }
            }
            if let Err(e) = registry.resolve(&field.ty) {
                errors.push(format!("native: field '{}': {}", name, e));
            }
        }
    }

    CheckReport {
        schema_path: path.to_path_buf(),
        fields,
        errors,
        warnings,
        notes,
    }
}
