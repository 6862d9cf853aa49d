//! Budget Alert Report
//!
//! Evaluates every active budget in scope for an owner and collects the
//! status rows, the alerts and the spending totals.

use serde::Serialize;

use crate::config::Settings;
use crate::models::{AlertStatus, BudgetAlert, BudgetStatusRow, Money, OwnerId, Period};
use crate::services::{AlertService, BudgetService};
use crate::storage::{BudgetScope, Snapshot};

/// Totals across the budgets in scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    /// Sum of the limits
    pub budgeted: Money,
    /// Sum of each budget's aggregated spend
    pub spent: Money,
    /// Number of budgets in scope
    pub active_count: usize,
}

impl SpendingSummary {
    /// budgeted - spent
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }
}

/// Budget Alert Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlertReport {
    pub owner: OwnerId,
    pub scope: BudgetScope,
    /// One row per budget, in budget collection order
    pub rows: Vec<BudgetStatusRow>,
    /// Near-limit and exceeded budgets, in the same order as `rows`
    pub alerts: Vec<BudgetAlert>,
    pub totals: SpendingSummary,
}

impl BudgetAlertReport {
    /// Report on the owner's budgets for one period
    pub fn generate(snapshot: &Snapshot, owner: OwnerId, period: Period, settings: &Settings) -> Self {
        Self::build(snapshot, owner, BudgetScope::Period(period), settings)
    }

    /// Report on every budget whose period is at or before `period`
    ///
    /// Each budget is measured against the spend of its own period.
    pub fn generate_through(
        snapshot: &Snapshot,
        owner: OwnerId,
        period: Period,
        settings: &Settings,
    ) -> Self {
        Self::build(snapshot, owner, BudgetScope::Through(period), settings)
    }

    fn build(snapshot: &Snapshot, owner: OwnerId, scope: BudgetScope, settings: &Settings) -> Self {
        let alert_service =
            AlertService::new(snapshot).with_currency_symbol(settings.currency_symbol.as_str());

        let mut rows = Vec::new();
        let mut alerts = Vec::new();
        let mut totals = SpendingSummary::default();

        for budget in BudgetService::new(snapshot).budgets_in_scope(owner, scope) {
            let evaluation = alert_service.evaluate(budget);

            totals.budgeted += evaluation.row.limit;
            totals.spent += evaluation.row.spent;
            totals.active_count += 1;

            rows.push(evaluation.row);
            alerts.extend(evaluation.alert);
        }

        tracing::debug!(
            owner = %owner,
            scope = %scope,
            budgets = totals.active_count,
            alerts = alerts.len(),
            "built budget alert report"
        );

        Self {
            owner,
            scope,
            rows,
            alerts,
            totals,
        }
    }

    /// Alerts for budgets that reached their limit
    pub fn exceeded(&self) -> impl Iterator<Item = &BudgetAlert> {
        self.alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Exceeded)
    }

    /// Alerts for budgets approaching their limit
    pub fn near_limit(&self) -> impl Iterator<Item = &BudgetAlert> {
        self.alerts
            .iter()
            .filter(|a| a.status == AlertStatus::NearLimit)
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Alerts - {}\n", self.scope));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No active budgets.\n");
            return output;
        }

        output.push_str(&crate::display::format_status_table(&self.rows, currency_symbol));
        output.push_str("\n\n");

        output.push_str(&format!(
            "Budgeted: {}  Spent: {}  Active budgets: {}\n",
            self.totals.budgeted.format_with_symbol(currency_symbol),
            self.totals.spent.format_with_symbol(currency_symbol),
            self.totals.active_count
        ));

        if self.alerts.is_empty() {
            output.push_str("\nAll budgets are within their limits.\n");
        } else {
            output.push('\n');
            for alert in &self.alerts {
                let marker = match alert.status {
                    AlertStatus::Exceeded => "!!",
                    _ => " !",
                };
                output.push_str(&format!("{} [{}] {}\n", marker, alert.period, alert));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetId, CategoryId, Transaction, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn owner() -> OwnerId {
        OwnerId::new(1)
    }

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    fn budget(id: u64, category: &str, period: Period, units: i64) -> Budget {
        Budget::new(
            BudgetId::new(id),
            owner(),
            CategoryId::new(category).unwrap(),
            Money::from_units(units),
            period,
        )
    }

    fn expense(id: u64, category: &str, (y, m, d): (i32, u32, u32), units: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            owner(),
            CategoryId::new(category).unwrap(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Money::from_units(units),
            TransactionKind::Expense,
        )
    }

    fn food_scenario(extra: Vec<Transaction>) -> Snapshot {
        let mut transactions = vec![
            expense(1, "Food", (2024, 6, 3), 100),
            expense(2, "Food", (2024, 6, 18), 50),
        ];
        transactions.extend(extra);
        Snapshot::new(transactions, vec![budget(1, "Food", june(), 200)])
    }

    #[test]
    fn test_within_limit_has_no_alerts() {
        let snapshot = food_scenario(Vec::new());
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        assert!(report.alerts.is_empty());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].status, AlertStatus::Normal);
        assert_eq!(
            report.totals,
            SpendingSummary {
                budgeted: Money::from_units(200),
                spent: Money::from_units(150),
                active_count: 1,
            }
        );
    }

    #[test]
    fn test_exceeded_budget_alerts() {
        let snapshot = food_scenario(vec![expense(3, "Food", (2024, 6, 25), 60)]);
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        assert_eq!(report.alerts.len(), 1);
        let alert = &report.alerts[0];
        assert_eq!(alert.status, AlertStatus::Exceeded);
        assert_eq!(alert.spent, Money::from_units(210));
        assert!(alert.message.contains("$10.00"));
        assert!(alert.message.contains("105.0%"));
        assert_eq!(report.exceeded().count(), 1);
        assert_eq!(report.near_limit().count(), 0);
    }

    #[test]
    fn test_other_month_excluded() {
        let snapshot = food_scenario(vec![expense(3, "Food", (2024, 7, 1), 500)]);
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        assert_eq!(report.totals.spent, Money::from_units(150));
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn test_unbudgeted_category_contributes_nothing() {
        let snapshot = food_scenario(vec![expense(3, "Transport", (2024, 6, 5), 900)]);
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        assert_eq!(report.totals.active_count, 1);
        assert_eq!(report.totals.spent, Money::from_units(150));
        assert!(report.rows.iter().all(|r| r.category.as_str() == "Food"));
    }

    #[test]
    fn test_empty_scope() {
        let report =
            BudgetAlertReport::generate(&Snapshot::default(), owner(), june(), &Settings::default());

        assert!(report.rows.is_empty());
        assert!(!report.has_alerts());
        assert_eq!(report.totals, SpendingSummary::default());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let snapshot = food_scenario(vec![expense(3, "Food", (2024, 6, 25), 20)]);
        let settings = Settings::default();

        let first = BudgetAlertReport::generate(&snapshot, owner(), june(), &settings);
        let second = BudgetAlertReport::generate(&snapshot, owner(), june(), &settings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_alerts_keep_budget_order() {
        let snapshot = Snapshot::new(
            vec![
                expense(1, "Transport", (2024, 6, 2), 100),
                expense(2, "Food", (2024, 6, 2), 190),
            ],
            vec![budget(1, "Transport", june(), 90), budget(2, "Food", june(), 200)],
        );
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        let categories: Vec<&str> = report.alerts.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(categories, vec!["Transport", "Food"]);
        assert_eq!(report.alerts[1].status, AlertStatus::NearLimit);
    }

    #[test]
    fn test_duplicate_budgets_counted_once() {
        let snapshot = Snapshot::new(
            vec![expense(1, "Food", (2024, 6, 2), 150)],
            vec![budget(1, "Food", june(), 200), budget(2, "Food", june(), 160)],
        );
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());

        assert_eq!(report.totals.active_count, 1);
        assert_eq!(report.totals.budgeted, Money::from_units(160));
        assert_eq!(report.rows[0].budget_id, BudgetId::new(2));
        assert_eq!(report.alerts[0].status, AlertStatus::NearLimit);
    }

    #[test]
    fn test_generate_through_uses_each_budget_period() {
        let may = june().prev();
        let snapshot = Snapshot::new(
            vec![
                expense(1, "Food", (2024, 5, 10), 250),
                expense(2, "Food", (2024, 6, 10), 20),
            ],
            vec![
                budget(1, "Food", may, 200),
                budget(2, "Food", june(), 200),
                budget(3, "Food", june().next(), 200),
            ],
        );
        let report =
            BudgetAlertReport::generate_through(&snapshot, owner(), june(), &Settings::default());

        assert_eq!(report.totals.active_count, 2);
        assert_eq!(report.totals.spent, Money::from_units(270));
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].period, may);
    }

    #[test]
    fn test_currency_symbol_from_settings() {
        let snapshot = food_scenario(vec![expense(3, "Food", (2024, 6, 25), 60)]);
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &settings);

        assert!(report.alerts[0].message.contains("€10.00"));
    }

    #[test]
    fn test_terminal_format() {
        let snapshot = food_scenario(vec![expense(3, "Food", (2024, 6, 25), 60)]);
        let report = BudgetAlertReport::generate(&snapshot, owner(), june(), &Settings::default());
        let output = report.format_terminal("$");

        assert!(output.contains("Budget Alerts - 2024-06"));
        assert!(output.contains("Food"));
        assert!(output.contains("Budget exceeded for Food"));
    }
}
