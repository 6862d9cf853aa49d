//! Budget display formatting
//!
//! Status table for alert reports and the plain budget listing.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_bar, format_ratio};
use crate::models::{AlertStatus, Budget, BudgetStatusRow};

const BAR_WIDTH: usize = 10;

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl StatusTableRow {
    fn from_row(row: &BudgetStatusRow, symbol: &str) -> Self {
        let status = match row.status {
            AlertStatus::Normal => "OK".to_string(),
            other => other.to_string(),
        };

        Self {
            id: row.budget_id.to_string(),
            period: row.period.to_string(),
            category: row.category.to_string(),
            limit: row.limit.format_with_symbol(symbol),
            spent: row.spent.format_with_symbol(symbol),
            remaining: row.remaining.format_with_symbol(symbol),
            used: format_ratio(row.ratio),
            bar: format_bar(row.ratio.min(1.0), 1.0, BAR_WIDTH),
            status,
        }
    }
}

/// Format budget status rows as a table
pub fn format_status_table(rows: &[BudgetStatusRow], symbol: &str) -> String {
    let mut table = Table::new(rows.iter().map(|r| StatusTableRow::from_row(r, symbol)));
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(3..7)).with(Alignment::right()));
    table.to_string()
}

/// Format a list of budgets with their limits
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let category_width = budgets
        .iter()
        .map(|b| b.category.as_str().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<7}  {:<category_width$}  {:>12}  {}\n",
        "ID",
        "Period",
        "Category",
        "Limit",
        "Active",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<7}  {:-<category_width$}  {:->12}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    for budget in budgets {
        output.push_str(&format!(
            "{:<8}  {:<7}  {:<category_width$}  {:>12}  {}\n",
            budget.id.to_string(),
            budget.period.to_string(),
            budget.category.as_str(),
            budget.limit.format_with_symbol(symbol),
            if budget.active { "yes" } else { "no" },
            category_width = category_width,
        ));
    }

    output
}
