//! Output module
//! Formats ranked results and records best-effort run metrics

pub mod formatter;
pub mod metrics;

pub use formatter::{OutputFormatter, ReportGenerator};
