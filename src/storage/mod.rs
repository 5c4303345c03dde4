//! Storage layer for the expense tracker
//!
//! Provides the append-only CSV ledger and the coordinator that locates it.

pub mod expenses;

pub use expenses::ExpenseStore;

use std::path::PathBuf;

use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to the ledger
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance using the ledger location from settings
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        let ledger = settings.ledger_path(&paths);
        Self::with_ledger(paths, ledger)
    }

    /// Create a Storage instance over an explicit ledger file
    pub fn with_ledger(paths: ExpensePaths, ledger: PathBuf) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(ledger),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}
