//! Expense service
//!
//! Turns entry input into validated expenses, records them, and produces
//! summaries over the ledger.

use std::fmt::Write;

use chrono::Local;
use log::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::reports::{summarize_by, Summary, SummaryKind};
use crate::storage::Storage;

/// Input for recording a new expense
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    /// Date text; blank means today
    pub date: Option<String>,
    pub category: String,
    pub description: String,
    /// Amount as typed; must parse as a number
    pub amount: String,
}

/// Service for recording and summarizing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    date_format: String,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service using `YYYY-MM-DD` for default dates
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Use a different strftime format for the date filled in when none is given
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Today's date in the configured format
    pub fn today(&self) -> ExpenseResult<String> {
        let mut date = String::new();
        write!(date, "{}", Local::now().format(&self.date_format)).map_err(|_| {
            ExpenseError::Config(format!("Invalid date format '{}'", self.date_format))
        })?;
        Ok(date)
    }

    /// Validate and record a new expense.
    ///
    /// Fails with `InvalidAmount` before anything is written if the amount is
    /// not a number.
    pub fn add(&self, input: NewExpense) -> ExpenseResult<Expense> {
        let date = match input.date {
            Some(date) if !date.trim().is_empty() => date,
            _ => self.today()?,
        };

        let expense = Expense::parse(date, input.category, input.description, &input.amount)?;
        self.storage.expenses.append(&expense)?;

        Ok(expense)
    }

    /// Every recorded expense, oldest first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage
            .expenses
            .read_all()?
            .iter()
            .map(|row| row.to_expense())
            .collect()
    }

    /// Summarize the whole ledger by month or by category
    pub fn summary(&self, kind: SummaryKind) -> ExpenseResult<Summary> {
        let records = self.storage.expenses.read_all()?;
        let summary = summarize_by(kind.key_fn(), &records)?;

        debug!(
            "Summarized {} records into {} {} totals",
            records.len(),
            summary.len(),
            kind
        );
        Ok(summary)
    }
}
