//! CSV Export functionality
//!
//! Exports budget status rows and transactions to spreadsheet-friendly CSV.
//! Amounts are written as plain decimals without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::models::{BudgetStatusRow, Transaction};
use crate::reports::BudgetAlertReport;

#[derive(Serialize)]
struct StatusCsvRecord<'a> {
    budget_id: u64,
    period: String,
    category: &'a str,
    limit: String,
    spent: String,
    remaining: String,
    /// Empty when the limit is not positive
    percent_used: String,
    status: &'static str,
}

impl<'a> StatusCsvRecord<'a> {
    fn from_row(row: &'a BudgetStatusRow) -> Self {
        use crate::models::AlertStatus;

        Self {
            budget_id: row.budget_id.get(),
            period: row.period.to_string(),
            category: row.category.as_str(),
            limit: row.limit.to_decimal_string(),
            spent: row.spent.to_decimal_string(),
            remaining: row.remaining.to_decimal_string(),
            percent_used: if row.ratio.is_finite() {
                format!("{:.1}", row.ratio * 100.0)
            } else {
                String::new()
            },
            status: match row.status {
                AlertStatus::Normal => "normal",
                AlertStatus::NearLimit => "near_limit",
                AlertStatus::Exceeded => "exceeded",
            },
        }
    }
}

#[derive(Serialize)]
struct TransactionCsvRecord<'a> {
    id: u64,
    date: String,
    category: &'a str,
    kind: &'static str,
    amount: String,
    note: &'a str,
}

fn export_error(e: impl std::fmt::Display) -> BudgetAlertsError {
    BudgetAlertsError::Export(e.to_string())
}

/// Export the status rows of a budget alert report to CSV
pub fn export_report_csv<W: Write>(report: &BudgetAlertReport, writer: W) -> BudgetAlertsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if report.rows.is_empty() {
        // serde only emits a header alongside the first record
        csv_writer
            .write_record([
                "budget_id",
                "period",
                "category",
                "limit",
                "spent",
                "remaining",
                "percent_used",
                "status",
            ])
            .map_err(export_error)?;
    }

    for row in &report.rows {
        csv_writer
            .serialize(StatusCsvRecord::from_row(row))
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> BudgetAlertsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record(["id", "date", "category", "kind", "amount", "note"])
            .map_err(export_error)?;
    }

    for txn in transactions {
        csv_writer
            .serialize(TransactionCsvRecord {
                id: txn.id.get(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                category: txn.category.as_str(),
                kind: if txn.is_income() { "income" } else { "expense" },
                amount: txn.amount.to_decimal_string(),
                note: txn.note.as_deref().unwrap_or(""),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
