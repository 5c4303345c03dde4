//! Expense CLI commands
//!
//! Implements the `add` and `list` commands.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::ExpenseResult;
use crate::services::{ExpenseService, NewExpense};
use crate::storage::Storage;

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50"; negative for refunds)
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
    /// Category label (e.g., Food, Transportation)
    #[arg(short, long)]
    pub category: String,
    /// Expense date (YYYY-MM-DD, default today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description of the expense
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage).with_date_format(settings.date_format.clone());

    let expense = service.add(NewExpense {
        date: args.date,
        category: args.category,
        description: args.description,
        amount: args.amount,
    })?;

    println!("Recorded expense: {}", expense);
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list()?;

    print!("{}", format_expense_list(&expenses, &settings.currency_symbol));
    Ok(())
}
