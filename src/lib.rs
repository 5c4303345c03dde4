//! Expense tracker - a personal expense log for the terminal
//!
//! This library records spending events in an append-only CSV ledger and
//! summarizes them by month or by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record
//! - `storage`: Append-only CSV ledger
//! - `reports`: Month and category summaries
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML summary export
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::reports::SummaryKind;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let monthly = ExpenseService::new(&storage).summary(SummaryKind::Month)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
