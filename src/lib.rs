//! budget-alerts - monthly spending budgets with limit alerts
//!
//! This library turns recorded transactions into a spend-vs-limit assessment
//! per category and month, and classifies each budget as normal, near its
//! limit or exceeded.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, transactions, budgets, alerts)
//! - `storage`: Store read interface, snapshots and the JSON file store
//! - `services`: Period resolution, spend aggregation, budget lookup, alert classification
//! - `reports`: Budget alert report and cash flow summary
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `budget-alerts` binary
//!
//! # Example
//!
//! ```rust
//! use budget_alerts::config::Settings;
//! use budget_alerts::models::{Budget, BudgetId, CategoryId, Money, OwnerId, Period};
//! use budget_alerts::reports::BudgetAlertReport;
//! use budget_alerts::storage::Snapshot;
//!
//! let owner = OwnerId::new(1);
//! let june = Period::new(2024, 6).unwrap();
//! let food = CategoryId::new("Food").unwrap();
//! let budget = Budget::new(BudgetId::new(1), owner, food, Money::from_units(200), june);
//!
//! let snapshot = Snapshot::new(Vec::new(), vec![budget]);
//! let report = BudgetAlertReport::generate(&snapshot, owner, june, &Settings::default());
//! assert_eq!(report.totals.active_count, 1);
//! assert!(report.alerts.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetAlertsError, BudgetAlertsResult};
