//! Interactive menu shell
//!
//! A prompt loop over any reader/writer pair: add an expense, view the
//! monthly or category summary, or exit. Errors are reported and the menu
//! is shown again.

use std::io::{BufRead, Write};

use log::warn;

use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::models::parse_amount;
use crate::reports::SummaryKind;
use crate::services::{ExpenseService, NewExpense};

/// Interactive expense shell
pub struct Shell<'a, R, W> {
    service: ExpenseService<'a>,
    currency_symbol: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading commands from `input` and writing to `output`
    pub fn new(
        service: ExpenseService<'a>,
        currency_symbol: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            currency_symbol: currency_symbol.into(),
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Expense Tracker")?;
            writeln!(self.output, "1. Add Expense")?;
            writeln!(self.output, "2. View Monthly Summary")?;
            writeln!(self.output, "3. View Category Summary")?;
            writeln!(self.output, "4. Exit")?;

            let choice = match self.prompt("Enter your choice: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.trim() {
                "1" => {
                    if !self.add_expense()? {
                        break;
                    }
                }
                "2" => self.show_summary(SummaryKind::Month)?,
                "3" => self.show_summary(SummaryKind::Category)?,
                "4" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting Expense Tracker. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Collect and record one expense. Returns false if input ended.
    fn add_expense(&mut self) -> ExpenseResult<bool> {
        let Some(date) = self.prompt("Enter the date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Enter the category (e.g., Food, Transportation): ")?
        else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Enter the description of the expense: ")? else {
            return Ok(false);
        };

        let amount = loop {
            let Some(amount) = self.prompt("Enter the amount spent: ")? else {
                return Ok(false);
            };
            if parse_amount(&amount).is_ok() {
                break amount;
            }
            writeln!(self.output, "Invalid amount. Please enter a number.")?;
        };

        let input = NewExpense {
            date: Some(date),
            category,
            description,
            amount,
        };

        match self.service.add(input) {
            Ok(expense) => writeln!(self.output, "Recorded expense: {}", expense)?,
            Err(e) => {
                warn!("Failed to record expense: {}", e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }

        Ok(true)
    }

    fn show_summary(&mut self, kind: SummaryKind) -> ExpenseResult<()> {
        match self.service.summary(kind) {
            Ok(summary) => {
                writeln!(self.output)?;
                write!(
                    self.output,
                    "{}",
                    format_summary(&summary, kind, &self.currency_symbol)
                )?;
            }
            Err(e) => {
                warn!("Failed to build {} summary: {}", kind, e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    /// Print a prompt and read one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
