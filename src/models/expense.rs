//! Expense model
//!
//! An `Expense` is one logged spending event. `StoredExpense` is the raw row
//! read back from the ledger, interpreted lazily so that a malformed row only
//! fails when something needs its amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Number of fields in a ledger row: date, category, description, amount
pub const FIELD_COUNT: usize = 4;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date of the expense, conventionally `YYYY-MM-DD` (not calendar-checked)
    pub date: String,

    /// Free-text category label
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Amount spent; units are implicit
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Build an expense from text input, parsing the amount
    pub fn parse(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: &str,
    ) -> ExpenseResult<Self> {
        let amount = parse_amount(amount)?;
        Ok(Self::new(date, category, description, amount))
    }

    /// Fields in ledger order. The amount uses the shortest text that parses
    /// back to the same value.
    pub fn to_fields(&self) -> [String; FIELD_COUNT] {
        [
            self.date.clone(),
            self.category.clone(),
            self.description.clone(),
            self.amount.to_string(),
        ]
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {:.2}",
            self.date, self.category, self.description, self.amount
        )
    }
}

/// Parse a user- or file-supplied amount.
///
/// Surrounding whitespace is ignored. Stricter than `str::parse::<f64>`:
/// `"nan"`, `"inf"` and `"infinity"` parse as floats there but are rejected
/// here, so every stored amount is finite.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseError::InvalidAmount(trimmed.to_string())),
    }
}

/// A row as read back from the ledger, not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredExpense {
    /// 1-based line number of the row in the ledger file
    pub line: u64,

    /// Raw field values
    pub fields: Vec<String>,
}

impl StoredExpense {
    /// Create a stored row
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Interpret the row as an expense.
    ///
    /// Fails with `MalformedRecord` when the row does not have exactly four
    /// fields or its amount is not a number.
    pub fn to_expense(&self) -> ExpenseResult<Expense> {
        if self.fields.len() != FIELD_COUNT {
            return Err(ExpenseError::malformed(
                self.line,
                format!(
                    "expected {} fields, found {}",
                    FIELD_COUNT,
                    self.fields.len()
                ),
            ));
        }

        let amount = parse_amount(&self.fields[3]).map_err(|_| {
            ExpenseError::malformed(
                self.line,
                format!("amount '{}' is not a number", self.fields[3]),
            )
        })?;

        Ok(Expense::new(
            self.fields[0].clone(),
            self.fields[1].clone(),
            self.fields[2].clone(),
            amount,
        ))
    }
}

impl From<&Expense> for StoredExpense {
    fn from(expense: &Expense) -> Self {
        Self::new(0, expense.to_fields().to_vec())
    }
}
