//! Cash Flow Summary
//!
//! Income, expenses and net balance for an owner, over all time or one period.

use serde::Serialize;

use crate::models::{Money, OwnerId, Period};
use crate::storage::Snapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CashFlowSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub total_income: Money,
    pub total_expenses: Money,
    /// income - expenses
    pub net_balance: Money,
    pub transaction_count: usize,
}

impl CashFlowSummary {
    /// Summarize the owner's transactions, restricted to `period` when given
    pub fn generate(snapshot: &Snapshot, owner: OwnerId, period: Option<Period>) -> Self {
        let mut summary = Self {
            period,
            ..Self::default()
        };

        let in_scope = snapshot
            .transactions()
            .iter()
            .filter(|t| t.owner_id == owner)
            .filter(|t| period.map_or(true, |p| p.contains(t.date)));

        for txn in in_scope {
            if txn.is_income() {
                summary.total_income += txn.amount;
            } else {
                summary.total_expenses += txn.amount;
            }
            summary.transaction_count += 1;
        }
        summary.net_balance = summary.total_income - summary.total_expenses;

        summary
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let title = match self.period {
            Some(p) => format!("Cash Flow - {}", p),
            None => "Cash Flow - all time".to_string(),
        };

        let mut output = String::new();
        output.push_str(&title);
        output.push('\n');
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total income:",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total expenses:",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Net balance:",
            self.net_balance.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("{} transactions\n", self.transaction_count));
        output
    }
}
