//! `ALTER TABLE` migrations between two versions of a schema.

use indexmap::IndexSet;
use schemata_core::Dialect;
use schemata_schema::{Field, Result, Schema};
use tracing::debug;

/// Columns added and dropped between two versions of a schema.
///
/// Fields are matched by name only. A field present in both versions is
/// never reported, even if its type, default or doc changed. Fields without
/// a name are ignored.
#[derive(Debug)]
pub struct SchemaDiff<'a> {
    table: &'a str,
    /// Fields of the new version missing from the old one, in new field order
    pub added: Vec<&'a Field>,
    /// Fields of the old version missing from the new one, in old field order
    pub dropped: Vec<&'a Field>,
}

impl<'a> SchemaDiff<'a> {
    pub fn between(old: &'a Schema, new: &'a Schema) -> Self {
        let old_names: IndexSet<&str> = old.fields().filter_map(Field::name).collect();
        let new_names: IndexSet<&str> = new.fields().filter_map(Field::name).collect();

        let added = new
            .fields()
            .filter(|f| f.name().is_some_and(|n| !old_names.contains(n)))
            .collect();
        let dropped = old
            .fields()
            .filter(|f| f.name().is_some_and(|n| !new_names.contains(n)))
            .collect();

        Self {
            table: new.name(),
            added,
            dropped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.dropped.is_empty()
    }

    /// Render the diff as `ALTER TABLE` statements, one per line, ADD before DROP.
    pub fn to_ddl(&self, dialect: Dialect) -> Result<String> {
        let mapper = dialect.mapper();
        let mut ddl = String::new();

        for (name, field) in named(&self.added) {
            ddl.push_str(&format!(
                "ALTER TABLE {} ADD {} {};\n",
                self.table,
                mapper.quote_ident(name),
                mapper.map_type(&field.ty)?
            ));
        }

        for (name, field) in named(&self.dropped) {
            let column = mapper.quote_ident(name);
            if mapper.drop_keeps_type() {
                ddl.push_str(&format!(
                    "ALTER TABLE {} DROP COLUMN {} {};\n",
                    self.table,
                    column,
                    mapper.map_type(&field.ty)?
                ));
            } else {
                ddl.push_str(&format!(
                    "ALTER TABLE {} DROP COLUMN {};\n",
                    self.table, column
                ));
            }
        }

        Ok(ddl)
    }
}

fn named<'f>(fields: &[&'f Field]) -> impl Iterator<Item = (&'f str, &'f Field)> {
    fields.iter().filter_map(|&f| f.name().map(|n| (n, f)))
}

/// `ALTER TABLE` statements migrating `old` to `new`.
///
/// Returns an empty string when no column was added or dropped.
pub fn alter(old: &Schema, new: &Schema, dialect: Dialect) -> Result<String> {
    let diff = SchemaDiff::between(old, new);
    debug!(
        schema = new.name(),
        from = %old.version(),
        to = %new.version(),
        added = diff.added.len(),
        dropped = diff.dropped.len(),
        "computed schema diff"
    );
    diff.to_ddl(dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(version: &str, fields: &str) -> Schema {
        let doc = format!(r#"{{"sections": [{{"section": "s", "fields": [{fields}]}}]}}"#);
        Schema::from_json("diaSources", version, &doc).unwrap()
    }

    #[test]
    fn test_same_schema_is_empty() {
        let s = schema(
            "7.4",
            r#"{"name": "a", "type": "int"}, {"name": "b", "type": "string"}"#,
        );
        assert_eq!(alter(&s, &s, Dialect::Sql).unwrap(), "");
        assert_eq!(alter(&s, &s, Dialect::Cql).unwrap(), "");
        assert!(SchemaDiff::between(&s, &s).is_empty());
    }

    #[test]
    fn test_sql_add_and_drop() {
        let old = schema(
            "7.3",
            r#"{"name": "a", "type": "int"}, {"name": "x", "type": "long"}"#,
        );
        let new = schema(
            "7.4",
            r#"{"name": "a", "type": "int"}, {"name": "b", "type": "string"}"#,
        );
        assert_eq!(
            alter(&old, &new, Dialect::Sql).unwrap(),
            "ALTER TABLE diaSources ADD `b` varchar(16);\n\
             ALTER TABLE diaSources DROP COLUMN `x` bigint;\n"
        );
    }

    #[test]
    fn test_cql_drop_has_no_type() {
        let old = schema(
            "7.3",
            r#"{"name": "a", "type": "int"}, {"name": "x", "type": "long"}"#,
        );
        let new = schema(
            "7.4",
            r#"{"name": "a", "type": "int"}, {"name": "b", "type": "char"}"#,
        );
        assert_eq!(
            alter(&old, &new, Dialect::Cql).unwrap(),
            "ALTER TABLE diaSources ADD \"b\" ascii;\n\
             ALTER TABLE diaSources DROP COLUMN \"x\";\n"
        );
    }

    #[test]
    fn test_dropped_field_appears_once() {
        let old = schema(
            "7.3",
            r#"{"name": "x", "type": "int"}, {"name": "y", "type": "int"}"#,
        );
        let new = schema("7.4", r#"{"name": "y", "type": "int"}"#);

        let ddl = alter(&old, &new, Dialect::Sql).unwrap();
        assert_eq!(ddl.matches("DROP COLUMN `x`").count(), 1);
        assert_eq!(ddl.matches("ADD `x`").count(), 0);
    }

    #[test]
    fn test_changed_type_is_not_reported() {
        let old = schema("7.3", r#"{"name": "a", "type": "int"}"#);
        let new = schema("7.4", r#"{"name": "a", "type": "long", "doc": "now wider"}"#);
        assert_eq!(alter(&old, &new, Dialect::Sql).unwrap(), "");
    }

    #[test]
    fn test_nameless_fields_are_ignored() {
        let old = schema("7.3", r#"{"type": "int"}"#);
        let new = schema("7.4", r#"{"type": "nonsense"}, {"name": "a", "type": "int"}"#);
        assert_eq!(
            alter(&old, &new, Dialect::Sql).unwrap(),
            "ALTER TABLE diaSources ADD `a` int;\n"
        );
    }

    #[test]
    fn test_order_follows_fields() {
        let old = schema(
            "7.3",
            r#"{"name": "d2", "type": "int"}, {"name": "d1", "type": "int"}, {"name": "k", "type": "int"}"#,
        );
        let new = schema(
            "7.4",
            r#"{"name": "k", "type": "int"}, {"name": "a2", "type": "int"}, {"name": "a1", "type": "int"}"#,
        );
        let diff = SchemaDiff::between(&old, &new);
        let added: Vec<_> = diff.added.iter().filter_map(|f| f.name()).collect();
        let dropped: Vec<_> = diff.dropped.iter().filter_map(|f| f.name()).collect();
        assert_eq!(added, ["a2", "a1"]);
        assert_eq!(dropped, ["d2", "d1"]);
    }

    #[test]
    fn test_unknown_type_aborts() {
        let old = schema("7.3", r#"{"name": "a", "type": "int"}"#);
        let new = schema(
            "7.4",
            r#"{"name": "a", "type": "int"}, {"name": "t", "type": "text"}"#,
        );
        assert!(alter(&old, &new, Dialect::Sql).is_ok());
        assert!(alter(&old, &new, Dialect::Cql).is_err());
    }

    #[test]
    fn test_sql_drop_needs_a_mappable_type() {
        let old = schema(
            "7.3",
            r#"{"name": "a", "type": "int"}, {"name": "flag", "type": "boolean"}"#,
        );
        let new = schema("7.4", r#"{"name": "a", "type": "int"}"#);

        let err = alter(&old, &new, Dialect::Sql).unwrap_err();
        assert!(
            matches!(*err, schemata_schema::Error::UnknownType(ref e) if e.token == "boolean" && e.target == "sql")
        );
        assert_eq!(
            alter(&old, &new, Dialect::Cql).unwrap(),
            "ALTER TABLE diaSources DROP COLUMN \"flag\";\n"
        );
    }
}
