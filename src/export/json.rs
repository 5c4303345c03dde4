//! JSON Export functionality
//!
//! Exports a summary to JSON with its kind and grand total.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{Summary, SummaryKind};

/// One key of an exported summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub key: String,
    pub total: f64,
}

/// Serializable form of a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryExport {
    /// What the keys are (month or category)
    pub kind: SummaryKind,

    /// Totals in first-occurrence order
    pub entries: Vec<SummaryEntry>,

    /// Sum of all totals
    pub grand_total: f64,
}

impl SummaryExport {
    /// Build the export structure from a computed summary
    pub fn from_summary(summary: &Summary, kind: SummaryKind) -> Self {
        Self {
            kind,
            entries: summary
                .iter()
                .map(|(key, total)| SummaryEntry {
                    key: key.to_string(),
                    total,
                })
                .collect(),
            grand_total: summary.grand_total(),
        }
    }
}

/// Export a summary to pretty-printed JSON
pub fn export_summary_json<W: Write>(
    summary: &Summary,
    kind: SummaryKind,
    mut writer: W,
) -> ExpenseResult<()> {
    let export = SummaryExport::from_summary(summary, kind);

    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
