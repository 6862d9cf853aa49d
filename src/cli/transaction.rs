//! Transaction CLI commands
//!
//! Recording an expense first checks it against the category's budget and
//! prints a warning when it would bring spend near or over the limit.

use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use super::{parse_amount, parse_category, parse_date};
use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::export::export_transactions_csv;
use crate::models::{AlertStatus, OwnerId, Transaction, TransactionKind};
use crate::services::{AlertService, PeriodService};
use crate::storage::{NewTransaction, Snapshot, Storage};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction (an expense unless --income is given)
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "42.50")
        amount: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Record as income
        #[arg(short, long)]
        income: bool,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only transactions dated in this period
        #[arg(short, long)]
        period: Option<String>,
        /// Only transactions in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export transactions to CSV, oldest first
    Export {
        /// Only transactions dated in this period
        #[arg(short, long)]
        period: Option<String>,
        /// Only transactions in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    owner: OwnerId,
    cmd: TransactionCommands,
) -> BudgetAlertsResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            date,
            income,
            note,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;
            let date = match date.as_deref() {
                Some(d) => parse_date(d)?,
                None => chrono::Local::now().date_naive(),
            };
            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            if kind == TransactionKind::Expense && amount.is_positive() && amount.is_recordable() {
                let snapshot = Snapshot::capture(storage, owner)?;
                let pending = AlertService::new(&snapshot)
                    .with_currency_symbol(symbol)
                    .check_pending_expense(owner, &category, date, amount);

                if let Some(alert) = pending {
                    let label = match alert.status {
                        AlertStatus::Exceeded => "Warning",
                        _ => "Heads up",
                    };
                    println!("{}: {}", label, alert);
                }
            }

            let txn = storage.add_transaction(NewTransaction {
                owner_id: owner,
                category,
                date,
                amount,
                kind,
                note,
            })?;

            println!(
                "Recorded {} {}: {} in {} on {}",
                match txn.kind {
                    TransactionKind::Income => "income",
                    TransactionKind::Expense => "expense",
                },
                txn.id,
                txn.amount.format_with_symbol(symbol),
                txn.category,
                txn.date.format("%Y-%m-%d")
            );
        }

        TransactionCommands::List {
            period,
            category,
            limit,
        } => {
            let mut transactions =
                filtered_transactions(storage, owner, period.as_deref(), category.as_deref())?;
            transactions.reverse();
            transactions.truncate(limit);

            print!(
                "{}",
                format_transaction_register(&transactions, symbol, &settings.date_format)
            );
        }

        TransactionCommands::Export {
            period,
            category,
            output,
        } => {
            let transactions =
                filtered_transactions(storage, owner, period.as_deref(), category.as_deref())?;

            match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        BudgetAlertsError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    export_transactions_csv(&transactions, BufWriter::new(file))?;
                    println!(
                        "{} transactions exported to: {}",
                        transactions.len(),
                        path.display()
                    );
                }
                None => export_transactions_csv(&transactions, io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

/// The owner's transactions matching the optional filters, oldest first
fn filtered_transactions(
    storage: &Storage,
    owner: OwnerId,
    period: Option<&str>,
    category: Option<&str>,
) -> BudgetAlertsResult<Vec<Transaction>> {
    let period = period.map(|p| PeriodService::new().parse(p)).transpose()?;
    let category = category.map(parse_category).transpose()?;

    let mut transactions = storage.transactions.get_by_owner(owner)?;
    transactions.retain(|t| {
        period.map_or(true, |p| p.contains(t.date))
            && category.as_ref().map_or(true, |c| &t.category == c)
    });
    transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    Ok(transactions)
}
