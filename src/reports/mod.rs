//! Reports module for budget-alerts
//!
//! Budget alert report and cash flow summary.

pub mod budget_alerts;
pub mod cash_flow;

pub use budget_alerts::{BudgetAlertReport, SpendingSummary};
pub use cash_flow::CashFlowSummary;
