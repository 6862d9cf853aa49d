//! Service layer for budget-alerts
//!
//! Services read from a [`Snapshot`](crate::storage::Snapshot) captured once
//! per request: period resolution, spend aggregation, budget lookup and
//! alert classification.

pub mod alert;
pub mod budget;
pub mod category;
pub mod period;
pub mod spending;

pub use alert::{build_alert, classify, render_message, AlertService, BudgetEvaluation};
pub use budget::BudgetService;
pub use category::known_categories;
pub use period::{period_bounds, resolve_period, PeriodService};
pub use spending::SpendingService;
