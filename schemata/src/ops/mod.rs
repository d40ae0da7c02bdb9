//! Core operations.
//!
//! This module contains the logic behind the reporting commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod info;

pub use check::check;
pub use info::info;
