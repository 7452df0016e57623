#![warn(missing_docs)]
//! AccessBench Report - Run-Order Output
//!
//! Renders the measurements of one run as plain text, one line per trial:
//! - Human (`<label> : <elapsed> ms`)
//! - Tab (`<label>\t<elapsed>`)
//!
//! Lines always appear in the order the trials ran.

mod format;
mod report;

pub use format::{format_millis, format_report, write_report};
pub use report::Report;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<label> : <elapsed> ms`
    #[default]
    Human,
    /// `<label>\t<elapsed>`
    Tab,
}
