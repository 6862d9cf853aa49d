//! Alert status and derived alert records
//!
//! Alerts are computed on every request and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryId;
use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;

/// Alert level for a budget's spend-to-limit ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Ratio below 0.8
    Normal,
    /// Ratio in [0.8, 1.0)
    NearLimit,
    /// Ratio at or above 1.0
    Exceeded,
}

impl AlertStatus {
    /// Whether this status produces an alert
    pub fn is_alert(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::NearLimit => write!(f, "Near limit"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Outcome of comparing spend against a limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub status: AlertStatus,
    /// spent / limit; infinite when the limit is not positive
    pub ratio: f64,
}

impl Classification {
    /// Ratio as a percentage
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// A near-limit or exceeded budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category: CategoryId,
    pub period: Period,
    pub limit: Money,
    pub spent: Money,
    pub status: AlertStatus,
    pub message: String,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Spend-vs-limit state of a single budget, alerting or not
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatusRow {
    pub budget_id: BudgetId,
    pub category: CategoryId,
    pub period: Period,
    pub limit: Money,
    pub spent: Money,
    /// limit - spent; negative once the budget is exceeded
    pub remaining: Money,
    pub ratio: f64,
    pub status: AlertStatus,
}
