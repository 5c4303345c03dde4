//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display.

pub mod expense;
pub mod summary;

pub use expense::format_expense_list;
pub use summary::{format_summary, format_total, NO_DATA_MESSAGE};
