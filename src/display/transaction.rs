//! Transaction display formatting
//!
//! Register view for transaction listings.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use super::truncate;
use crate::models::{Transaction, TransactionKind};

/// Format a date with a user-supplied strftime pattern, falling back to ISO
/// when the pattern is invalid
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format(date_format).to_string()
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let kind = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{:<8} {:10} {:18} {} {:>12}  {}",
        txn.id.to_string(),
        format_date(txn.date, date_format),
        truncate(txn.category.as_str(), 18),
        kind,
        txn.amount.format_with_symbol(symbol),
        txn.note.as_deref().unwrap_or("")
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:10} {:18} {} {:>12}  {}\n",
        "ID", "Date", "Category", " ", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output
}
