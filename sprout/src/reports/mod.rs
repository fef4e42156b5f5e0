//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod add_db;
mod info;
mod init;
mod make;
mod output;

pub use add_db::AddDbReport;
pub use info::InfoReport;
pub use init::InitReport;
pub use make::{MakeReport, RouteOutcome};
#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Output, Report, TerminalOutput};
