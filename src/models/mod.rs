//! Core data models for budget-alerts
//!
//! Transactions and budgets as supplied by a store, plus the value types
//! (money, periods, categories, ids) and the derived alert records.

pub mod alert;
pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use alert::{AlertStatus, BudgetAlert, BudgetStatusRow, Classification};
pub use budget::{Budget, BudgetValidationError};
pub use category::{CategoryId, CategoryValidationError, DEFAULT_CATEGORIES};
pub use ids::{BudgetId, OwnerId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
