//! Artifact generators for schemata.
//!
//! Everything here is a pure function of one loaded [`Schema`], or of two
//! versions of it for migrations.
//!
//! # Module Organization
//!
//! - [`ddl`] - `CREATE TABLE` and `ALTER TABLE` statements (SQL and CQL)
//! - [`html`] - HTML documentation
//! - [`artifact`] - Rendering any artifact through one entry point
//! - [`markup`] - Indented markup builder
//!
//! [`Schema`]: schemata_schema::Schema

pub mod artifact;
pub mod ddl;
pub mod html;
pub mod markup;

pub use artifact::{Artifact, render};
pub use ddl::{SchemaDiff, alter, cql_create, sql_create};
pub use html::{HtmlOptions, html};
