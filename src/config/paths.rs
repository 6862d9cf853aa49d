//! Path management for budget-alerts
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_ALERTS_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (e.g. `~/.config/budget-alerts` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BudgetAlertsError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_ALERTS_DATA_DIR";

/// Manages all paths used by budget-alerts
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetAlertsError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "budget-alerts")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetAlertsError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetAlertsError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            BudgetAlertsError::Io(format!(
                "Failed to create data directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }

    /// Check if the settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
