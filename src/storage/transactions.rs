//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::BudgetAlertsError;
use crate::models::{CategoryId, Money, OwnerId, Transaction, TransactionId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Fields of a transaction before the store assigns its id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub owner_id: OwnerId,
    pub category: CategoryId,
    pub date: NaiveDate,
    pub amount: Money,
    pub kind: TransactionKind,
    pub note: Option<String>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), BudgetAlertsError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, ordered by id
    pub fn save(&self) -> Result<(), BudgetAlertsError> {
        let data = self.data.read().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = TransactionData {
            transactions: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Validate, assign the next id and insert
    pub fn add(&self, new: NewTransaction) -> Result<Transaction, BudgetAlertsError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = data
            .keys()
            .next_back()
            .map(TransactionId::next)
            .unwrap_or(TransactionId::new(1));

        let mut txn = Transaction::new(
            id,
            new.owner_id,
            new.category,
            new.date,
            new.amount,
            new.kind,
        );
        if let Some(note) = new.note {
            txn = txn.with_note(note);
        }

        txn.validate()
            .map_err(|e| BudgetAlertsError::Validation(e.to_string()))?;

        data.insert(id, txn.clone());
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetAlertsError> {
        let data = self.data.read().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All transactions of an owner, in id order
    pub fn get_by_owner(&self, owner: OwnerId) -> Result<Vec<Transaction>, BudgetAlertsError> {
        let data = self.data.read().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .values()
            .filter(|t| t.owner_id == owner)
            .cloned()
            .collect())
    }

    /// Remove a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, BudgetAlertsError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, BudgetAlertsError> {
        let data = self.data.read().map_err(|e| {
            BudgetAlertsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
