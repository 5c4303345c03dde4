//! Where the expense tracker keeps its files
//!
//! Everything lives under one base directory: `config.json` at the top and
//! the ledger in `data/expenses.csv`. `EXPENSE_TRACKER_DATA_DIR` picks the
//! base directory outright; otherwise it is `expense-tracker` inside the
//! platform config directory.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

const APP_DIR: &str = "expense-tracker";

/// Locations of the settings file and the ledger
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the process environment.
    ///
    /// Fails with `ExpenseError::Config` when neither the override nor the
    /// platform config directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        Self::from_env(|key| std::env::var(key).ok())
    }

    fn from_env<F>(var: F) -> Result<Self, ExpenseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = match var(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => platform_config_dir(&var)?.join(APP_DIR),
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ledger used when settings name no other file
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Create the base and `data` directories if missing
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                ExpenseError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
fn platform_config_dir<F>(var: &F) -> Result<PathBuf, ExpenseError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg));
    }
    var("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| ExpenseError::Config("HOME environment variable not set".into()))
}

#[cfg(windows)]
fn platform_config_dir<F>(var: &F) -> Result<PathBuf, ExpenseError>
where
    F: Fn(&str) -> Option<String>,
{
    var("APPDATA")
        .map(PathBuf::from)
        .ok_or_else(|| ExpenseError::Config("APPDATA environment variable not set".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_override_wins() {
        let vars = [(DATA_DIR_ENV, "/tmp/ledger-home"), ("HOME", "/home/me")];
        let paths = ExpensePaths::from_env(lookup(&vars)).unwrap();
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/ledger-home"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_platform_fallback() {
        let vars = [("HOME", "/home/me")];
        let paths = ExpensePaths::from_env(lookup(&vars)).unwrap();
        assert_eq!(
            paths.base_dir(),
            &PathBuf::from("/home/me/.config/expense-tracker")
        );

        let vars = [("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/me")];
        let paths = ExpensePaths::from_env(lookup(&vars)).unwrap();
        assert_eq!(paths.base_dir(), &PathBuf::from("/xdg/expense-tracker"));

        let err = ExpensePaths::from_env(lookup(&[])).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("expenses.csv")
        );
    }
}
