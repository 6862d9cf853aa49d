//! Storage layer for budget-alerts
//!
//! The engine only depends on the [`BudgetStore`] read interface. [`Storage`]
//! is the JSON file adapter used by the CLI; [`Snapshot`] doubles as an
//! in-memory store.

pub mod budget;
pub mod file_io;
pub mod snapshot;
pub mod transactions;

pub use budget::{BudgetRepository, NewBudget};
pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{BudgetScope, BudgetStore, Snapshot};
pub use transactions::{NewTransaction, TransactionRepository};

use crate::config::paths::AppPaths;
use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::models::{Budget, OwnerId, Transaction};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: AppPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AppPaths) -> Result<Self, BudgetAlertsError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetAlertsError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetAlertsError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Record a transaction and persist the transaction file
    pub fn add_transaction(&self, new: NewTransaction) -> BudgetAlertsResult<Transaction> {
        let txn = self.transactions.add(new)?;
        self.transactions.save()?;
        tracing::info!(id = %txn.id, owner = %txn.owner_id, category = %txn.category, "transaction recorded");
        Ok(txn)
    }

    /// Create a budget and persist the budget file
    pub fn add_budget(&self, new: NewBudget) -> BudgetAlertsResult<Budget> {
        let budget = self.budgets.add(new)?;
        self.budgets.save()?;
        tracing::info!(id = %budget.id, owner = %budget.owner_id, period = %budget.period, "budget created");
        Ok(budget)
    }
}

impl BudgetStore for Storage {
    fn list_transactions(&self, owner: OwnerId) -> BudgetAlertsResult<Vec<Transaction>> {
        self.transactions.get_by_owner(owner)
    }

    fn list_active_budgets(
        &self,
        owner: OwnerId,
        scope: BudgetScope,
    ) -> BudgetAlertsResult<Vec<Budget>> {
        self.budgets.list_active(owner, scope)
    }
}
