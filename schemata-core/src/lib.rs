//! Core types and utilities for schemata.
//!
//! This crate provides the abstract type vocabulary, the per-dialect type
//! mappers and a few helpers shared by the schema model and the generators.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod native;
mod type_mapper;
mod utils;
mod version;

pub use error::UnknownType;
// File operations
pub use file::OutputFile;
// Type mapping
pub use native::{NativeType, NativeTypeRegistry, to_native_type};
pub use type_mapper::{
    CqlTypeMapper, Dialect, SqlTypeMapper, TypeMapper, TypeToken, to_cql_type, to_sql_type,
};
// String utilities
pub use utils::escape_html;
pub use version::SchemaVersion;
