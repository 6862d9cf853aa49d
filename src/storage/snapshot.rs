//! Store read interface and materialized snapshots
//!
//! The engine never queries a store piecemeal. Callers capture one
//! [`Snapshot`] per owner and every service reads from it, so spend
//! aggregation and budget lookup always see the same data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetAlertsResult;
use crate::models::{Budget, OwnerId, Period, Transaction};

/// Which budget periods a query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "period", rename_all = "snake_case")]
pub enum BudgetScope {
    /// Exactly one period
    Period(Period),
    /// Every period up to and including this one
    Through(Period),
    /// Every period
    All,
}

impl BudgetScope {
    pub fn includes(&self, period: Period) -> bool {
        match self {
            Self::Period(p) => period == *p,
            Self::Through(p) => period <= *p,
            Self::All => true,
        }
    }
}

impl fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period(p) => write!(f, "{}", p),
            Self::Through(p) => write!(f, "through {}", p),
            Self::All => write!(f, "all periods"),
        }
    }
}

/// Read interface the engine needs from a data store
///
/// Failures are returned unchanged to the caller; implementations own any
/// retry policy.
pub trait BudgetStore {
    /// All transactions belonging to the owner
    fn list_transactions(&self, owner: OwnerId) -> BudgetAlertsResult<Vec<Transaction>>;

    /// The owner's expenses dated within `start..=end`
    fn list_expenses_in_range(
        &self,
        owner: OwnerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BudgetAlertsResult<Vec<Transaction>> {
        Ok(self
            .list_transactions(owner)?
            .into_iter()
            .filter(|t| t.is_expense() && t.date >= start && t.date <= end)
            .collect())
    }

    /// Active budgets of the owner within the scope, in store order
    fn list_active_budgets(
        &self,
        owner: OwnerId,
        scope: BudgetScope,
    ) -> BudgetAlertsResult<Vec<Budget>>;
}

/// Point-in-time view of one owner's transactions and active budgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl Snapshot {
    /// Build a snapshot from already-materialized records
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Read the owner's transactions and every active budget from the store
    pub fn capture<S: BudgetStore + ?Sized>(store: &S, owner: OwnerId) -> BudgetAlertsResult<Self> {
        let transactions = store.list_transactions(owner)?;
        let budgets = store.list_active_budgets(owner, BudgetScope::All)?;
        tracing::debug!(
            owner = %owner,
            transactions = transactions.len(),
            budgets = budgets.len(),
            "captured snapshot"
        );
        Ok(Self::new(transactions, budgets))
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}

impl BudgetStore for Snapshot {
    fn list_transactions(&self, owner: OwnerId) -> BudgetAlertsResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.owner_id == owner)
            .cloned()
            .collect())
    }

    fn list_active_budgets(
        &self,
        owner: OwnerId,
        scope: BudgetScope,
    ) -> BudgetAlertsResult<Vec<Budget>> {
        Ok(self
            .budgets
            .iter()
            .filter(|b| b.active && b.owner_id == owner && scope.includes(b.period))
            .cloned()
            .collect())
    }
}
