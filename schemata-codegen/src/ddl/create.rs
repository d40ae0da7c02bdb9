//! `CREATE TABLE` statements.

use schemata_core::{Dialect, TypeMapper};
use schemata_schema::{Field, Result, Schema};
use tracing::{debug, warn};

/// SQL `CREATE TABLE IF NOT EXISTS` statement for a schema
pub fn sql_create(schema: &Schema) -> Result<String> {
    create_table(schema, Dialect::Sql)
}

/// CQL `CREATE TABLE IF NOT EXISTS` statement for a schema
pub fn cql_create(schema: &Schema) -> Result<String> {
    create_table(schema, Dialect::Cql)
}

/// Build a `CREATE TABLE` statement in the given dialect.
///
/// Columns follow `fields()` order and are followed by the schema's index
/// definitions. For CQL the schema's `with` clause goes after the closing
/// parenthesis. Any unmapped type aborts the whole statement.
pub fn create_table(schema: &Schema, dialect: Dialect) -> Result<String> {
    let mapper = dialect.mapper();

    let mut lines = Vec::new();
    for field in schema.fields() {
        let Some(name) = field.name() else {
            warn!(schema = schema.name(), ty = %field.ty, "skipping field without a name");
            continue;
        };
        lines.push(column_definition(mapper, name, field)?);
    }
    lines.extend(schema.indexes().iter().cloned());

    let mut ddl = format!("CREATE TABLE IF NOT EXISTS {}(\n", schema.name());
    if !lines.is_empty() {
        ddl.push_str(&lines.join(",\n"));
        ddl.push('\n');
    }
    ddl.push(')');
    if let (Dialect::Cql, Some(with)) = (dialect, schema.with_clause()) {
        ddl.push('\n');
        ddl.push_str(with);
    }

    debug!(
        schema = schema.name(),
        %dialect,
        columns = lines.len() - schema.indexes().len(),
        "generated create table"
    );
    Ok(ddl)
}

/// One column of a `CREATE TABLE` body: `name type [DEFAULT value] [extra]`.
pub fn column_definition(mapper: &dyn TypeMapper, name: &str, field: &Field) -> Result<String> {
    let mut column = format!("{} {}", mapper.quote_ident(name), mapper.map_type(&field.ty)?);
    if let Some(default) = &field.default {
        if mapper.supports_default() {
            column.push_str(" DEFAULT ");
            column.push_str(default);
        } else {
            debug!(column = name, dialect = %mapper.dialect(), "dropping unsupported default");
        }
    }
    if let Some(extra) = &field.extra {
        column.push(' ');
        column.push_str(extra);
    }
    Ok(column)
}

#[cfg(test)]
mod tests {
    use schemata_schema::Error;

    use super::*;

    fn schema(doc: &str) -> Schema {
        Schema::from_json("annotations", "7.4", doc).unwrap()
    }

    #[test]
    fn test_sql_column_with_extra() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [
                {"name": "id", "type": "int", "extra": "NOT NULL AUTO_INCREMENT"}
            ]}]}"#,
        );
        let sql = sql_create(&s).unwrap();
        assert!(sql.contains("`id` int NOT NULL AUTO_INCREMENT"));
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS annotations(\n"));
    }

    #[test]
    fn test_sql_default_precedes_extra() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [
                {"name": "n", "type": "int", "default": "0", "extra": "NOT NULL"}
            ]}]}"#,
        );
        assert!(sql_create(&s).unwrap().contains("`n` int DEFAULT 0 NOT NULL"));
    }

    #[test]
    fn test_cql_ignores_default() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [
                {"name": "n", "type": "int", "default": "0"}
            ]}]}"#,
        );
        let cql = cql_create(&s).unwrap();
        assert!(cql.contains("\"n\" int\n"));
        assert!(!cql.contains("DEFAULT"));
    }

    #[test]
    fn test_unknown_type_aborts() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [
                {"name": "a", "type": "int"},
                {"name": "b", "type": "nonsense"}
            ]}]}"#,
        );
        let err = sql_create(&s).unwrap_err();
        assert!(matches!(*err, Error::UnknownType(ref e) if e.token == "nonsense"));
    }

    #[test]
    fn test_dialect_specific_unknown_type() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [{"name": "t", "type": "text"}]}]}"#,
        );
        assert!(sql_create(&s).is_ok());
        assert!(cql_create(&s).is_err());
    }

    #[test]
    fn test_nameless_fields_are_skipped() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [
                {"type": "int"},
                {"name": "a", "type": "int"}
            ]}]}"#,
        );
        assert_eq!(
            sql_create(&s).unwrap(),
            "CREATE TABLE IF NOT EXISTS annotations(\n`a` int\n)"
        );
    }

    #[test]
    fn test_with_clause_is_cql_only() {
        let s = schema(
            r#"{"sections": [{"section": "s", "fields": [{"name": "a", "type": "int"}]}],
                "with": "WITH CLUSTERING ORDER BY (a DESC)"}"#,
        );
        assert!(!sql_create(&s).unwrap().contains("WITH"));
        assert!(
            cql_create(&s)
                .unwrap()
                .ends_with(")\nWITH CLUSTERING ORDER BY (a DESC)")
        );
    }

    #[test]
    fn test_empty_table_has_no_blank_body() {
        let s = schema(r#"{"sections": [{"section": "s", "fields": [{"type": "int"}]}]}"#);
        assert_eq!(sql_create(&s).unwrap(), "CREATE TABLE IF NOT EXISTS annotations(\n)");

        let s = schema(r#"{"sections": [], "with": "WITH comment = 'x'"}"#);
        assert_eq!(
            cql_create(&s).unwrap(),
            "CREATE TABLE IF NOT EXISTS annotations(\n)\nWITH comment = 'x'"
        );
    }
}
