//! Expense summaries
//!
//! Groups ledger rows by a derived key (month or category) and totals their
//! amounts. Keys keep the order in which they first appear in the ledger.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::models::{Expense, StoredExpense};

/// Number of leading characters of a date that form its month key (`YYYY-MM`)
const MONTH_KEY_LEN: usize = 7;

/// Grouping key for the month of an expense: the first seven characters of
/// its date, or the whole date when it is shorter.
pub fn month_key(expense: &Expense) -> String {
    expense.date.chars().take(MONTH_KEY_LEN).collect()
}

/// Grouping key for the category of an expense, verbatim
pub fn category_key(expense: &Expense) -> String {
    expense.category.clone()
}

/// Which summary to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    /// Totals per `YYYY-MM`
    Month,
    /// Totals per category label
    Category,
}

impl SummaryKind {
    /// The key function for this kind of summary
    pub fn key_fn(&self) -> fn(&Expense) -> String {
        match self {
            Self::Month => month_key,
            Self::Category => category_key,
        }
    }

    /// Heading shown above the summary
    pub fn title(&self) -> &'static str {
        match self {
            Self::Month => "Monthly Summary",
            Self::Category => "Category Summary",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Ordered mapping from key to total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Summary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to the total for `key`, starting from zero for a new key
    pub fn add(&mut self, key: String, amount: f64) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.clone(), 0.0));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].1 += amount;
    }

    /// Total for a key, if it occurred
    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key occurred
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, total)` in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, total)| (key.as_str(), *total))
    }

    /// Sum of all totals
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }
}

/// Group rows by `key_fn` and total their amounts.
///
/// Each row is interpreted in order; the first malformed row aborts the whole
/// summary with its error, so no partial result is ever returned.
pub fn summarize_by<F>(key_fn: F, records: &[StoredExpense]) -> ExpenseResult<Summary>
where
    F: Fn(&Expense) -> String,
{
    let mut summary = Summary::new();

    for record in records {
        let expense = record.to_expense()?;
        summary.add(key_fn(&expense), expense.amount);
    }

    Ok(summary)
}
