//! Export module for the expense tracker
//!
//! Writes summaries in machine-readable formats:
//! - CSV: `Key,Total` rows (spreadsheet-compatible)
//! - JSON: structured summary with grand total
//! - YAML: the same structure, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use json::{export_summary_json, SummaryEntry, SummaryExport};
pub use yaml::export_summary_yaml;
