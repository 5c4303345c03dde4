//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and summary generation.

pub mod expense;

pub use expense::{ExpenseService, NewExpense};
