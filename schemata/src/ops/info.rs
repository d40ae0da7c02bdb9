//! Info operation - schema summary.

use std::path::Path;

use schemata_schema::Schema;

use crate::reports::{InfoReport, SectionInfo};

/// Execute the info operation.
pub fn info(schema: &Schema, path: &Path) -> InfoReport {
    let sections = schema
        .sections()
        .iter()
        .map(|section| SectionInfo {
            name: section.name.clone(),
            ext: section.ext,
            fields: section.fields.len(),
        })
        .collect();

    InfoReport {
        name: schema.name().to_string(),
        version: schema.version().to_string(),
        schema_path: std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
        core_fields: schema.core_fields().count(),
        ext_fields: schema.ext_fields().count(),
        sections,
        indexes: schema.indexes().to_vec(),
        with_clause: schema.with_clause().map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let schema = Schema::from_json(
            "diaSources",
            "7_4",
            r#"{
                "sections": [
                    {"section": "core", "fields": [
                        {"name": "id", "type": "long"},
                        {"name": "band", "type": "char"}
                    ]},
                    {"section": "extra", "ext": true, "fields": [
                        {"name": "score", "type": "float"}
                    ]}
                ],
                "indexes": ["PRIMARY KEY (id)"],
                "with": "WITH compaction = {'class': 'LeveledCompactionStrategy'}"
            }"#,
        )
        .unwrap();

        let report = info(&schema, Path::new("does/not/exist.json"));
        assert_eq!(report.name, "diaSources");
        assert_eq!(report.version, "7.4");
        assert_eq!(report.schema_path, Path::new("does/not/exist.json"));
        assert_eq!(report.core_fields, 2);
        assert_eq!(report.ext_fields, 1);
        assert_eq!(report.sections.len(), 2);
        assert!(report.sections[1].ext);
        assert_eq!(report.indexes, ["PRIMARY KEY (id)"]);
        assert!(report.with_clause.is_some());
    }
}
