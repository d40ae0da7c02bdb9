//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod info;
mod output;

pub use check::CheckReport;
pub use info::{InfoReport, SectionInfo};
pub use output::{Report, TerminalOutput};
