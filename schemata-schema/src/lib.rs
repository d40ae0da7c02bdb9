//! Versioned schema documents.
//!
//! A schema document describes one version of one table as an ordered list of
//! sections, each holding fields. Sections are either core content or
//! extended (`ext`) add-on content.
//!
//! ```ignore
//! let loader = SchemaLoader::new("schema");
//! let schema = loader.load("objects", "7.4", None)?;
//! for field in schema.core_fields() {
//!     println!("{:?} {}", field.name, field.ty);
//! }
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod field;
mod loader;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use field::{Field, Section};
pub use loader::SchemaLoader;
pub use schema::{NativeDict, NativeField, Schema};
