//! CSV Export functionality
//!
//! Exports a summary as `Key,Total` rows.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::Summary;

/// Export a summary to CSV, totals rounded to two decimals
pub fn export_summary_csv<W: Write>(summary: &Summary, writer: W) -> ExpenseResult<()> {
    let mut writer = ::csv::Writer::from_writer(writer);

    writer
        .write_record(["Key", "Total"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for (key, total) in summary.iter() {
        let total = format!("{:.2}", total);
        writer
            .write_record([key, total.as_str()])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
