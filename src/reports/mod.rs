//! Reports module for the expense tracker
//!
//! Provides the month and category summaries computed over the ledger.

pub mod summary;

pub use summary::{category_key, month_key, summarize_by, Summary, SummaryKind};
