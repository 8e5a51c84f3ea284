//! Output formatting and report generation

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
