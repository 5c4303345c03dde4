//! Core data models for the expense tracker
//!
//! The only entity is the expense record: a validated `Expense` on the way
//! in, and a raw `StoredExpense` on the way out of the ledger.

pub mod expense;

pub use expense::{parse_amount, Expense, StoredExpense, FIELD_COUNT};
