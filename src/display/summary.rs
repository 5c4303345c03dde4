//! Summary display formatting
//!
//! Renders summaries as `key: $total` lines for the terminal.

use crate::reports::{Summary, SummaryKind};

/// Message shown when there is nothing to summarize
pub const NO_DATA_MESSAGE: &str = "No expenses recorded yet.";

/// Format a total with the currency symbol and two decimals
pub fn format_total(total: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, total)
}

/// Format a summary under its title, one `key: total` line per entry.
/// An empty summary renders as the no-data message.
pub fn format_summary(summary: &Summary, kind: SummaryKind, currency_symbol: &str) -> String {
    if summary.is_empty() {
        return format!("{}\n", NO_DATA_MESSAGE);
    }

    let mut output = format!("{}:\n", kind.title());
    for (key, total) in summary.iter() {
        output.push_str(&format!("{}: {}\n", key, format_total(total, currency_symbol)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(15.0, "$"), "$15.00");
        assert_eq!(format_total(-2.5, "€"), "€-2.50");
        assert_eq!(format_total(0.0, ""), "0.00");
    }

    #[test]
    fn test_format_summary() {
        let mut summary = Summary::new();
        summary.add("2024-01".into(), 15.0);
        summary.add("2024-02".into(), 20.0);

        assert_eq!(
            format_summary(&summary, SummaryKind::Month, "$"),
            "Monthly Summary:\n2024-01: $15.00\n2024-02: $20.00\n"
        );
    }

    #[test]
    fn test_format_empty_summary() {
        assert_eq!(
            format_summary(&Summary::new(), SummaryKind::Category, "$"),
            "No expenses recorded yet.\n"
        );
    }
}
