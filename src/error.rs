//! Custom error types for budget-alerts
//!
//! Defines the error hierarchy shared by the engine, the store adapters and
//! the CLI, using thiserror for the boilerplate.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget-alerts operations
#[derive(Error, Debug)]
pub enum BudgetAlertsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A budget limit that is zero or negative
    #[error("Invalid budget limit {limit}: limit must be greater than zero")]
    InvalidLimit { limit: Money },

    /// Entity not found errors (only for records addressed by id)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Failures reading from or writing to the backing store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetAlertsError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidLimit { .. })
    }
}

impl From<std::io::Error> for BudgetAlertsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetAlertsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-alerts operations
pub type BudgetAlertsResult<T> = Result<T, BudgetAlertsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetAlertsError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetAlertsError::budget_not_found("bgt-7");
        assert_eq!(err.to_string(), "Budget not found: bgt-7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_limit_error() {
        let err = BudgetAlertsError::InvalidLimit {
            limit: Money::from_cents(-500),
        };
        assert_eq!(
            err.to_string(),
            "Invalid budget limit -$5.00: limit must be greater than zero"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetAlertsError = io_err.into();
        assert!(matches!(err, BudgetAlertsError::Io(_)));
    }
}
