//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. This is the
//! validation layer for budget creation: limits of zero or less never reach
//! the file.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetAlertsError;
use crate::models::{Budget, BudgetId, BudgetValidationError, CategoryId, Money, OwnerId, Period};

use super::file_io::{read_json, write_json_atomic};
use super::snapshot::BudgetScope;

/// Serializable budget data
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Fields of a budget before the store assigns its id
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub owner_id: OwnerId,
    pub category: CategoryId,
    pub limit: Money,
    pub period: Period,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BTreeMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), BudgetAlertsError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in file_data.budgets {
            budgets.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk, ordered by id
    pub fn save(&self) -> Result<(), BudgetAlertsError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: budgets.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Validate, assign the next id and insert an active budget
    pub fn add(&self, new: NewBudget) -> Result<Budget, BudgetAlertsError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = budgets
            .keys()
            .next_back()
            .map(BudgetId::next)
            .unwrap_or(BudgetId::new(1));

        let budget = Budget::new(id, new.owner_id, new.category, new.limit, new.period);
        budget.validate().map_err(|e| match e {
            BudgetValidationError::NonPositiveLimit(limit) => BudgetAlertsError::InvalidLimit { limit },
            other => BudgetAlertsError::Validation(other.to_string()),
        })?;
        budgets.insert(id, budget.clone());
        Ok(budget)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, BudgetAlertsError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&id).cloned())
    }

    /// Deactivate one of the owner's budgets
    pub fn deactivate(&self, owner: OwnerId, id: BudgetId) -> Result<Budget, BudgetAlertsError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let budget = budgets
            .get_mut(&id)
            .filter(|b| b.owner_id == owner)
            .ok_or_else(|| BudgetAlertsError::budget_not_found(id.to_string()))?;

        budget.deactivate();
        Ok(budget.clone())
    }

    /// Active budgets of an owner in scope: newest period first, then by id
    pub fn list_active(
        &self,
        owner: OwnerId,
        scope: BudgetScope,
    ) -> Result<Vec<Budget>, BudgetAlertsError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| b.active && b.owner_id == owner && scope.includes(b.period))
            .cloned()
            .collect();
        list.sort_by_key(|b| (Reverse(b.period), b.id));
        Ok(list)
    }

    /// All budgets of an owner including inactive ones, by id
    pub fn get_by_owner(&self, owner: OwnerId) -> Result<Vec<Budget>, BudgetAlertsError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets
            .values()
            .filter(|b| b.owner_id == owner)
            .cloned()
            .collect())
    }
}
