//! Transaction model
//!
//! Amounts are always non-negative; whether money came in or went out is
//! carried by [`TransactionKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryId;
use super::ids::{OwnerId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: TransactionId,

    /// Owner of the transaction
    pub owner_id: OwnerId,

    pub category: CategoryId,

    pub date: NaiveDate,

    /// Amount (never negative)
    pub amount: Money,

    pub kind: TransactionKind,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a transaction
    pub fn new(
        id: TransactionId,
        owner_id: OwnerId,
        category: CategoryId,
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            owner_id,
            category,
            date,
            amount,
            kind,
            note: None,
        }
    }

    /// Attach a note (blank notes are dropped)
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Validate the transaction before it is handed to a store
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        if !self.amount.is_recordable() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.id, self.date, self.kind, self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount,
    ZeroAmount,
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(
                f,
                "Transaction amount cannot be negative; use the transaction kind for direction"
            ),
            Self::ZeroAmount => write!(f, "Transaction amount must be greater than zero"),
            Self::AmountTooLarge(amount) => write!(
                f,
                "Transaction amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_RECORDABLE
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            OwnerId::new(1),
            CategoryId::new("Food").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            Money::from_cents(amount),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_validation() {
        assert!(sample(1250).validate().is_ok());
        assert_eq!(
            sample(-1250).validate(),
            Err(TransactionValidationError::NegativeAmount)
        );
        assert_eq!(sample(0).validate(), Err(TransactionValidationError::ZeroAmount));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let too_large = Money::MAX_RECORDABLE.cents() + 1;
        assert_eq!(
            sample(too_large).validate(),
            Err(TransactionValidationError::AmountTooLarge(Money::from_cents(too_large)))
        );
        assert!(sample(Money::MAX_RECORDABLE.cents()).validate().is_ok());
    }

    #[test]
    fn test_kind_helpers() {
        let txn = sample(100);
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_blank_note_dropped() {
        assert_eq!(sample(100).with_note("  ").note, None);
        assert_eq!(sample(100).with_note("lunch").note.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_serialization() {
        let txn = sample(1250).with_note("groceries");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"expense\""));
        assert!(json.contains("\"date\":\"2024-06-03\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
