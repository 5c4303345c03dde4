//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod shell;
pub mod summary;

pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use shell::Shell;
pub use summary::{handle_summary_command, OutputFormat, SummaryArgs, SummaryBy};
