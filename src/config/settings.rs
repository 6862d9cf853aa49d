//! User settings for budget-alerts
//!
//! Display preferences, the default owner used by the CLI when none is
//! given, and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::BudgetAlertsError;
use crate::models::OwnerId;

/// User settings persisted in `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in messages and tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Owner used when the CLI is not given one explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<OwnerId>,

    /// tracing filter used when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_owner: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, BudgetAlertsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved here; the caller decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetAlertsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetAlertsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), BudgetAlertsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetAlertsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetAlertsError::Io(format!("Failed to write settings file: {}", e)))
    }
}
