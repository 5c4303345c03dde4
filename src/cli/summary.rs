//! CLI commands for summaries
//!
//! Prints a month or category summary, or exports it to a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml};
use crate::reports::{Summary, SummaryKind};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// What to group expenses by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryBy {
    /// Totals per month (YYYY-MM)
    Month,
    /// Totals per category
    Category,
}

impl From<SummaryBy> for SummaryKind {
    fn from(by: SummaryBy) -> Self {
        match by {
            SummaryBy::Month => SummaryKind::Month,
            SummaryBy::Category => SummaryKind::Category,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key: $total` lines
    Text,
    /// CSV with a Key,Total header
    Csv,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Group by month or by category
    #[arg(value_enum)]
    pub by: SummaryBy,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let kind = SummaryKind::from(args.by);
    let summary = ExpenseService::new(storage).summary(kind)?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        write_summary(&summary, kind, args.format, settings, &mut writer)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        println!("{} exported to: {}", kind.title(), path.display());
    } else {
        let stdout = io::stdout();
        write_summary(&summary, kind, args.format, settings, stdout.lock())?;
    }

    Ok(())
}

/// Write a summary in the requested format
pub fn write_summary<W: Write>(
    summary: &Summary,
    kind: SummaryKind,
    format: OutputFormat,
    settings: &Settings,
    mut writer: W,
) -> ExpenseResult<()> {
    match format {
        OutputFormat::Text => {
            write!(
                writer,
                "{}",
                format_summary(summary, kind, &settings.currency_symbol)
            )
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
            Ok(())
        }
        OutputFormat::Csv => export_summary_csv(summary, writer),
        OutputFormat::Json => export_summary_json(summary, kind, writer),
        OutputFormat::Yaml => export_summary_yaml(summary, kind, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Summary {
        let mut summary = Summary::new();
        summary.add("Food".into(), 15.0);
        summary.add("Transport".into(), 20.0);
        summary
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_summary(
            &fixture(),
            SummaryKind::Category,
            format,
            &Settings::default(),
            &mut buffer,
        )
        .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_format() {
        assert_eq!(
            render(OutputFormat::Text),
            "Category Summary:\nFood: $15.00\nTransport: $20.00\n"
        );
    }

    #[test]
    fn test_csv_format() {
        assert_eq!(
            render(OutputFormat::Csv),
            "Key,Total\nFood,15.00\nTransport,20.00\n"
        );
    }

    #[test]
    fn test_structured_formats() {
        assert!(render(OutputFormat::Json).contains("\"grand_total\": 35.0"));
        assert!(render(OutputFormat::Yaml).contains("kind: category"));
    }

    #[test]
    fn test_summary_by_converts_to_kind() {
        assert_eq!(SummaryKind::from(SummaryBy::Month), SummaryKind::Month);
        assert_eq!(SummaryKind::from(SummaryBy::Category), SummaryKind::Category);
    }
}
