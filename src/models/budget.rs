//! Budget model
//!
//! A spending limit for one category in one monthly period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryId;
use super::ids::{BudgetId, OwnerId};
use super::money::Money;
use super::period::Period;

/// A spending limit for a category and period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Store-assigned identifier
    pub id: BudgetId,

    /// Owner of the budget
    pub owner_id: OwnerId,

    pub category: CategoryId,

    /// Spending limit (must be greater than zero)
    pub limit: Money,

    pub period: Period,

    /// Deactivated budgets are ignored by lookups and reports
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Budget {
    /// Create an active budget
    pub fn new(
        id: BudgetId,
        owner_id: OwnerId,
        category: CategoryId,
        limit: Money,
        period: Period,
    ) -> Self {
        Self {
            id,
            owner_id,
            category,
            limit,
            period,
            active: true,
        }
    }

    /// Whether this budget applies to the given owner, category and period
    pub fn matches(&self, owner_id: OwnerId, category: &CategoryId, period: Period) -> bool {
        self.active
            && self.owner_id == owner_id
            && &self.category == category
            && self.period == period
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        if !self.limit.is_recordable() {
            return Err(BudgetValidationError::LimitTooLarge(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} limit: {}", self.period, self.category, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
    LimitTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be greater than zero (got {})", limit)
            }
            Self::LimitTooLarge(limit) => write!(
                f,
                "Budget limit {} exceeds the maximum of {}",
                limit,
                Money::MAX_RECORDABLE
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
