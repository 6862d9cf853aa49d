//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage and service layers. Every
//! handler receives the owner explicitly.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ExportFormat, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::models::{CategoryId, Money};

pub(crate) fn parse_category(s: &str) -> BudgetAlertsResult<CategoryId> {
    CategoryId::new(s).map_err(|e| BudgetAlertsError::Validation(e.to_string()))
}

pub(crate) fn parse_amount(s: &str) -> BudgetAlertsResult<Money> {
    Money::parse(s).map_err(|e| BudgetAlertsError::Validation(e.to_string()))
}

pub(crate) fn parse_date(s: &str) -> BudgetAlertsResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetAlertsError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_category(" Food ").unwrap().as_str(), "Food");
        assert!(parse_category("  ").unwrap_err().is_validation());
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
        assert_eq!(
            parse_date("2024-06-03").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
        assert!(parse_date("03/06/2024").is_err());
    }
}
