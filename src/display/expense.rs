//! Expense display formatting
//!
//! Formats the ledger as an aligned table.

use crate::models::Expense;

use super::summary::{format_total, NO_DATA_MESSAGE};

/// Format expenses as a table with date, category, description and amount
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_DATA_MESSAGE);
    }

    let date_width = column_width(expenses.iter().map(|e| e.date.as_str()), "Date");
    let category_width = column_width(expenses.iter().map(|e| e.category.as_str()), "Category");
    let description_width = column_width(
        expenses.iter().map(|e| e.description.as_str()),
        "Description",
    );

    let mut output = String::new();
    output.push_str(&format!(
        "{:<dw$}  {:<cw$}  {:<sw$}  {:>12}\n",
        "Date",
        "Category",
        "Description",
        "Amount",
        dw = date_width,
        cw = category_width,
        sw = description_width
    ));
    output.push_str(&format!(
        "{:-<dw$}  {:-<cw$}  {:-<sw$}  {:->12}\n",
        "",
        "",
        "",
        "",
        dw = date_width,
        cw = category_width,
        sw = description_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<dw$}  {:<cw$}  {:<sw$}  {:>12}\n",
            expense.date,
            expense.category,
            expense.description.replace('\n', " "),
            format_total(expense.amount, currency_symbol),
            dw = date_width,
            cw = category_width,
            sw = description_width
        ));
    }

    output
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_list_rows_in_order() {
        let expenses = vec![
            Expense::new("2024-01-15", "Food", "Lunch", 10.0),
            Expense::new("2024-02-01", "Transport", "Bus", 2.5),
        ];

        let output = format_expense_list(&expenses, "$");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].starts_with("2024-01-15  Food"));
        assert!(lines[2].ends_with("$10.00"));
        assert!(lines[3].ends_with("$2.50"));
    }
}
