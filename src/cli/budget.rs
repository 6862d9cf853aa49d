//! Budget CLI commands
//!
//! Create, list and deactivate budgets, and show the status of one budget.

use clap::Subcommand;

use super::{parse_amount, parse_category};
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_ratio};
use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::models::{BudgetId, OwnerId};
use crate::services::{AlertService, BudgetService, PeriodService};
use crate::storage::{BudgetScope, NewBudget, Snapshot, Storage};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a monthly budget for a category
    Add {
        /// Category name
        category: String,
        /// Spending limit (e.g., "200" or "200.00")
        limit: String,
        /// Budget period (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List budgets
    List {
        /// Only budgets for this period
        #[arg(short, long)]
        period: Option<String>,
        /// Include deactivated budgets
        #[arg(short, long)]
        all: bool,
    },

    /// Deactivate a budget
    Deactivate {
        /// Budget ID (e.g., "bgt-3" or "3")
        id: String,
    },

    /// Show spend against the budget for one category
    Status {
        /// Category name
        category: String,
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    owner: OwnerId,
    cmd: BudgetCommands,
) -> BudgetAlertsResult<()> {
    let period_service = PeriodService::new();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            period,
        } => {
            let category = parse_category(&category)?;
            let limit = parse_amount(&limit)?;
            let period = period_service.parse_or_current(period.as_deref())?;

            let snapshot = Snapshot::capture(storage, owner)?;
            let previous = BudgetService::new(&snapshot)
                .budget_for(owner, &category, period)
                .map(|b| b.id);

            let budget = storage.add_budget(NewBudget {
                owner_id: owner,
                category,
                limit,
                period,
            })?;

            println!(
                "Created budget {}: {} {} for {}",
                budget.id,
                budget.category,
                budget.limit.format_with_symbol(symbol),
                period_service.format_period_friendly(&budget.period)
            );
            if let Some(previous) = previous {
                println!(
                    "Note: {} replaces {} for this category and period.",
                    budget.id, previous
                );
            }
        }

        BudgetCommands::List { period, all } => {
            let mut budgets = if all {
                storage.budgets.get_by_owner(owner)?
            } else {
                let scope = match period.as_deref() {
                    Some(p) => BudgetScope::Period(period_service.parse(p)?),
                    None => BudgetScope::All,
                };
                storage.budgets.list_active(owner, scope)?
            };

            if all {
                if let Some(p) = period.as_deref() {
                    let p = period_service.parse(p)?;
                    budgets.retain(|b| b.period == p);
                }
            }

            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Deactivate { id } => {
            let id: BudgetId = id
                .parse()
                .map_err(|_| BudgetAlertsError::Validation(format!("Invalid budget ID: {}", id)))?;

            let budget = storage.budgets.deactivate(owner, id)?;
            storage.budgets.save()?;
            tracing::info!(id = %budget.id, owner = %owner, "budget deactivated");

            println!(
                "Deactivated budget {} ({} for {})",
                budget.id, budget.category, budget.period
            );
        }

        BudgetCommands::Status { category, period } => {
            let category = parse_category(&category)?;
            let period = period_service.parse_or_current(period.as_deref())?;

            let snapshot = Snapshot::capture(storage, owner)?;
            let Some(budget) = BudgetService::new(&snapshot).budget_for(owner, &category, period)
            else {
                println!(
                    "No budget for {} in {}.",
                    category,
                    period_service.format_period_friendly(&period)
                );
                return Ok(());
            };

            let evaluation = AlertService::new(&snapshot)
                .with_currency_symbol(symbol)
                .evaluate(budget);
            let row = &evaluation.row;

            println!(
                "{} - {}",
                row.category,
                period_service.format_period_friendly(&row.period)
            );
            println!("{}", "=".repeat(40));
            println!("{:<12} {:>14}", "Limit:", row.limit.format_with_symbol(symbol));
            println!("{:<12} {:>14}", "Spent:", row.spent.format_with_symbol(symbol));
            println!(
                "{:<12} {:>14}",
                "Remaining:",
                row.remaining.format_with_symbol(symbol)
            );
            println!("{:<12} {:>14}", "Used:", format_ratio(row.ratio));
            println!("{:<12} {:>14}", "Status:", row.status.to_string());

            if let Some(alert) = &evaluation.alert {
                println!();
                println!("{}", alert);
            }
        }
    }

    Ok(())
}
