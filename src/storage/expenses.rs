//! Expense ledger backed by an append-only CSV file
//!
//! Each record is one line with the fields `date,category,description,amount`
//! and no header row. The file is opened and closed within every call.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, StoredExpense};

/// Append-only store for expense records
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given ledger file. Nothing is touched on disk
    /// until the first append.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file and its parent directory if needed
    pub fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(expense.to_fields()).map_err(|e| {
            ExpenseError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        writer.flush().map_err(|e| {
            ExpenseError::Storage(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        debug!("Appended expense to {}: {}", self.path.display(), expense);
        Ok(())
    }

    /// Read every record in append order.
    ///
    /// A missing ledger reads as empty. Rows are not interpreted here, so a
    /// row with the wrong number of fields or a bad amount is returned as-is.
    /// A blank line comes back as a row with no fields. Line numbers are the
    /// physical line a row starts on, counting blank lines and line breaks
    /// inside quoted fields.
    pub fn read_all(&self) -> ExpenseResult<Vec<StoredExpense>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No ledger at {}; nothing recorded yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ExpenseError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let mut rows = Vec::new();
        for (line, text) in split_records(&contents) {
            let fields = self.parse_fields(line, text)?;
            rows.push(StoredExpense::new(line, fields));
        }

        debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn parse_fields(&self, line: u64, text: &str) -> ExpenseResult<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut record = csv::StringRecord::new();
        reader.read_record(&mut record).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to read {} at line {}: {}",
                self.path.display(),
                line,
                e
            ))
        })?;

        Ok(record.iter().map(str::to_string).collect())
    }

    /// Write raw text to the ledger, replacing it. Test fixture helper.
    #[cfg(test)]
    pub(crate) fn write_raw(&self, contents: &str) -> ExpenseResult<()> {
        use std::io::Write;

        let mut file = fs::File::create(&self.path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

/// Split ledger text into records paired with the 1-based line each starts on.
///
/// A line break ends a record unless it sits inside a quoted field. An empty
/// line yields an empty record; the final line break does not.
fn split_records(contents: &str) -> Vec<(u64, &str)> {
    let mut records = Vec::new();
    let mut line: u64 = 1;
    let mut start = 0;
    let mut start_line = 1;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut quote_closed = false;

    for (i, c) in contents.char_indices() {
        if in_quotes {
            match c {
                '"' => {
                    in_quotes = false;
                    quote_closed = true;
                }
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            // `""` right after a closing quote is an escaped quote
            '"' if field_start || quote_closed => in_quotes = true,
            '\n' => {
                records.push((start_line, contents[start..i].trim_end_matches('\r')));
                line += 1;
                start = i + 1;
                start_line = line;
            }
            _ => {}
        }
        field_start = c == ',' || c == '\n';
        quote_closed = false;
    }

    if start < contents.len() {
        records.push((start_line, contents[start..].trim_end_matches('\r')));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{category_key, summarize_by};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, store)
    }

    fn interpret(rows: &[StoredExpense]) -> Vec<Expense> {
        rows.iter().map(|r| r.to_expense().unwrap()).collect()
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.path().exists());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_read() {
        let (_temp_dir, store) = create_test_store();
        let expense = Expense::new("2024-01-15", "Food", "Groceries", 42.17);

        store.append(&expense).unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[0].fields, expense.to_fields().to_vec());
        assert_eq!(interpret(&rows), vec![expense]);
    }

    #[test]
    fn test_append_preserves_order() {
        let (_temp_dir, store) = create_test_store();
        let expenses: Vec<_> = (0..20)
            .map(|i| Expense::new(format!("2024-01-{:02}", i + 1), "Misc", "", i as f64 * 1.5))
            .collect();

        for expense in &expenses {
            store.append(expense).unwrap();
        }

        assert_eq!(interpret(&store.read_all().unwrap()), expenses);
    }

    #[test]
    fn test_append_does_not_truncate_existing_content() {
        let (_temp_dir, store) = create_test_store();
        store.write_raw("2023-12-31,Food,Old,1.5\n").unwrap();

        store
            .append(&Expense::new("2024-01-01", "Food", "New", 2.0))
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "2023-12-31,Food,Old,1.5\n2024-01-01,Food,New,2\n");
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("nested").join("expenses.csv"));

        store
            .append(&Expense::new("2024-01-01", "Food", "", 1.0))
            .unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_fields_with_delimiters_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let expense = Expense::new(
            "2024-03-01",
            "Food, drink",
            "Said \"cheers\"\nthen left",
            -7.25,
        );

        store.append(&expense).unwrap();

        assert_eq!(interpret(&store.read_all().unwrap()), vec![expense]);
    }

    #[test]
    fn test_read_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        store
            .append(&Expense::new("2024-01-01", "Food", "a", 1.0))
            .unwrap();
        store
            .append(&Expense::new("2024-01-02", "Rent", "b", 2.0))
            .unwrap();

        let first = store.read_all().unwrap();
        let second = store.read_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_rows_are_returned_uninterpreted() {
        let (_temp_dir, store) = create_test_store();
        store
            .write_raw("2024-01-01,Food,Lunch,abc\n2024-01-02,Food\n")
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields[3], "abc");
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[1].fields.len(), 2);
        assert!(matches!(
            rows[0].to_expense(),
            Err(ExpenseError::MalformedRecord { line: 1, .. })
        ));
        assert!(matches!(
            rows[1].to_expense(),
            Err(ExpenseError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_blank_line_is_empty_row() {
        let (_temp_dir, store) = create_test_store();
        store
            .write_raw("2024-01-01,Food,a,1\n\n2024-01-02,Food,b,2\n")
            .unwrap();

        let rows = store.read_all().unwrap();
        let lines: Vec<_> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(rows[1].fields.is_empty());

        let err = summarize_by(category_key, &rows).unwrap_err();
        assert!(matches!(err, ExpenseError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_line_numbers_count_breaks_inside_quotes() {
        let (_temp_dir, store) = create_test_store();
        store
            .write_raw("2024-01-01,Food,\"two\nlines\",1\n2024-01-02,Food,b,oops\n")
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields[2], "two\nlines");
        assert_eq!(rows[1].line, 3);

        let err = summarize_by(category_key, &rows).unwrap_err();
        assert!(matches!(err, ExpenseError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_line_endings_do_not_add_rows() {
        let (_temp_dir, store) = create_test_store();
        store
            .write_raw("2024-01-01,Food,a,1\r\n2024-01-02,Food,\"say \"\"hi\"\"\",2")
            .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            interpret(&rows),
            vec![
                Expense::new("2024-01-01", "Food", "a", 1.0),
                Expense::new("2024-01-02", "Food", "say \"hi\"", 2.0),
            ]
        );
    }

    #[test]
    fn test_read_directory_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().to_path_buf());

        assert!(matches!(store.read_all(), Err(ExpenseError::Storage(_))));
    }
}
