//! DDL generation: `CREATE TABLE` and version-diff `ALTER TABLE` statements.

mod alter;
mod create;

pub use alter::{SchemaDiff, alter};
pub use create::{column_definition, cql_create, create_table, sql_create};
