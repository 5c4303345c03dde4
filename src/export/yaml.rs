//! YAML Export functionality
//!
//! Exports a summary to YAML for human-readable output.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::SummaryExport;
use crate::reports::{Summary, SummaryKind};

/// Export a summary to YAML
pub fn export_summary_yaml<W: Write>(
    summary: &Summary,
    kind: SummaryKind,
    mut writer: W,
) -> ExpenseResult<()> {
    let export = SummaryExport::from_summary(summary, kind);

    writeln!(writer, "# {}", kind.title()).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let mut summary = Summary::new();
        summary.add("Food".into(), 15.0);
        summary.add("Transport".into(), 20.0);

        let mut buffer = Vec::new();
        export_summary_yaml(&summary, SummaryKind::Category, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# Category Summary\n"));

        let parsed: SummaryExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.kind, SummaryKind::Category);
        assert_eq!(parsed.entries[0].key, "Food");
        assert_eq!(parsed.grand_total, 35.0);
    }
}
