//! Alert classification
//!
//! Thresholds compare cents exactly (`spent >= limit`, `5 * spent >= 4 * limit`)
//! so values sitting on a boundary are never pushed across it by rounding.
//! The ratio is only computed for display.

use chrono::NaiveDate;

use crate::models::{
    AlertStatus, Budget, BudgetAlert, BudgetStatusRow, CategoryId, Classification, Money, OwnerId,
    Period,
};
use crate::services::{BudgetService, SpendingService};
use crate::storage::Snapshot;

/// Classify spend against a limit
///
/// A limit of zero or less classifies as Exceeded with an infinite ratio.
pub fn classify(spent: Money, limit: Money) -> Classification {
    if !limit.is_positive() {
        return Classification {
            status: AlertStatus::Exceeded,
            ratio: f64::INFINITY,
        };
    }

    let spent_cents = i128::from(spent.cents());
    let limit_cents = i128::from(limit.cents());

    let status = if spent_cents >= limit_cents {
        AlertStatus::Exceeded
    } else if spent_cents * 5 >= limit_cents * 4 {
        AlertStatus::NearLimit
    } else {
        AlertStatus::Normal
    };

    Classification {
        status,
        ratio: spent.cents() as f64 / limit.cents() as f64,
    }
}

/// Human-readable alert text; `None` for Normal
pub fn render_message(
    category: &CategoryId,
    spent: Money,
    limit: Money,
    classification: &Classification,
    currency_symbol: &str,
) -> Option<String> {
    match classification.status {
        AlertStatus::Normal => None,
        AlertStatus::Exceeded => Some(format!(
            "Budget exceeded for {} by {} ({:.1}% of limit)",
            category,
            (spent - limit).format_with_symbol(currency_symbol),
            classification.percent()
        )),
        AlertStatus::NearLimit => Some(format!(
            "Budget for {} is near its limit: {} remaining ({:.1}% used)",
            category,
            (limit - spent).format_with_symbol(currency_symbol),
            classification.percent()
        )),
    }
}

/// Build an alert for a classification; `None` for Normal
pub fn build_alert(
    category: &CategoryId,
    period: Period,
    spent: Money,
    limit: Money,
    classification: &Classification,
    currency_symbol: &str,
) -> Option<BudgetAlert> {
    render_message(category, spent, limit, classification, currency_symbol).map(|message| {
        BudgetAlert {
            category: category.clone(),
            period,
            limit,
            spent,
            status: classification.status,
            message,
        }
    })
}

/// Evaluation of one budget: its status row and, when alerting, its alert
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluation {
    pub row: BudgetStatusRow,
    pub alert: Option<BudgetAlert>,
}

/// Service combining spend aggregation, lookup and classification
pub struct AlertService<'a> {
    snapshot: &'a Snapshot,
    currency_symbol: String,
}

impl<'a> AlertService<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            currency_symbol: "$".to_string(),
        }
    }

    /// Use a different currency symbol in messages
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Classify one budget against the spend recorded for its category and period
    pub fn evaluate(&self, budget: &Budget) -> BudgetEvaluation {
        let spent = SpendingService::new(self.snapshot).spent_for_category_in_period(
            budget.owner_id,
            &budget.category,
            budget.period,
        );
        let classification = classify(spent, budget.limit);

        let row = BudgetStatusRow {
            budget_id: budget.id,
            category: budget.category.clone(),
            period: budget.period,
            limit: budget.limit,
            spent,
            remaining: budget.limit - spent,
            ratio: classification.ratio,
            status: classification.status,
        };
        let alert = build_alert(
            &budget.category,
            budget.period,
            spent,
            budget.limit,
            &classification,
            &self.currency_symbol,
        );

        BudgetEvaluation { row, alert }
    }

    /// Whether spend has reached the active budget; false without a budget
    pub fn is_budget_exceeded(&self, owner: OwnerId, category: &CategoryId, period: Period) -> bool {
        BudgetService::new(self.snapshot)
            .budget_for(owner, category, period)
            .map(|budget| self.evaluate(budget).row.status == AlertStatus::Exceeded)
            .unwrap_or(false)
    }

    /// Alert that recording an expense would raise, before it is saved
    ///
    /// Adds `amount` to the spend already recorded for the period containing
    /// `date`. Returns `None` when no budget covers it or the result stays Normal.
    pub fn check_pending_expense(
        &self,
        owner: OwnerId,
        category: &CategoryId,
        date: NaiveDate,
        amount: Money,
    ) -> Option<BudgetAlert> {
        let period = Period::from_date(date);
        let budget = BudgetService::new(self.snapshot).budget_for(owner, category, period)?;

        let spent_to_date =
            SpendingService::new(self.snapshot).spent_for_category_in_period(owner, category, period);
        let projected = spent_to_date + amount;
        let classification = classify(projected, budget.limit);

        tracing::debug!(
            owner = %owner,
            category = %category,
            period = %period,
            projected = %projected,
            status = %classification.status,
            "checked pending expense"
        );

        build_alert(
            category,
            period,
            projected,
            budget.limit,
            &classification,
            &self.currency_symbol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Transaction, TransactionId, TransactionKind};

    fn money(units: i64) -> Money {
        Money::from_units(units)
    }

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    fn food() -> CategoryId {
        CategoryId::new("Food").unwrap()
    }

    fn food_budget() -> Budget {
        Budget::new(BudgetId::new(1), OwnerId::new(1), food(), money(200), june())
    }

    fn expense(id: u64, day: u32, units: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            OwnerId::new(1),
            food(),
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            money(units),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify(money(0), money(200)).status, AlertStatus::Normal);
        assert_eq!(classify(money(150), money(200)).status, AlertStatus::Normal);
        assert_eq!(classify(money(199), money(200)).status, AlertStatus::NearLimit);
        assert_eq!(classify(money(210), money(200)).status, AlertStatus::Exceeded);
    }

    #[test]
    fn test_classify_boundaries() {
        // exactly 80% is NearLimit, exactly 100% is Exceeded
        assert_eq!(classify(money(160), money(200)).status, AlertStatus::NearLimit);
        assert_eq!(
            classify(Money::from_cents(15999), money(200)).status,
            AlertStatus::Normal
        );
        assert_eq!(classify(money(200), money(200)).status, AlertStatus::Exceeded);
        assert_eq!(
            classify(Money::from_cents(19999), money(200)).status,
            AlertStatus::NearLimit
        );
        // 0.8 is not representable in binary; cents comparison keeps it exact
        assert_eq!(
            classify(Money::from_cents(80), Money::from_cents(100)).status,
            AlertStatus::NearLimit
        );
    }

    #[test]
    fn test_classify_matches_definition_over_grid() {
        for limit_cents in [1, 3, 7, 100, 999, 12345] {
            for spent_cents in 0..=(limit_cents * 2) {
                let status =
                    classify(Money::from_cents(spent_cents), Money::from_cents(limit_cents)).status;
                let expected = if spent_cents >= limit_cents {
                    AlertStatus::Exceeded
                } else if 5 * spent_cents >= 4 * limit_cents {
                    AlertStatus::NearLimit
                } else {
                    AlertStatus::Normal
                };
                assert_eq!(status, expected, "spent={spent_cents} limit={limit_cents}");
            }
        }
    }

    #[test]
    fn test_classify_non_positive_limit() {
        let zero = classify(money(0), Money::zero());
        assert_eq!(zero.status, AlertStatus::Exceeded);
        assert!(zero.ratio.is_infinite());

        let negative = classify(money(5), money(-10));
        assert_eq!(negative.status, AlertStatus::Exceeded);
    }

    #[test]
    fn test_exceeded_message() {
        let classification = classify(money(210), money(200));
        let message = render_message(&food(), money(210), money(200), &classification, "$").unwrap();
        assert_eq!(message, "Budget exceeded for Food by $10.00 (105.0% of limit)");
    }

    #[test]
    fn test_near_limit_message() {
        let classification = classify(money(170), money(200));
        let message = render_message(&food(), money(170), money(200), &classification, "€").unwrap();
        assert_eq!(
            message,
            "Budget for Food is near its limit: €30.00 remaining (85.0% used)"
        );
    }

    #[test]
    fn test_normal_has_no_message() {
        let classification = classify(money(10), money(200));
        assert!(render_message(&food(), money(10), money(200), &classification, "$").is_none());
    }

    #[test]
    fn test_evaluate() {
        let snapshot = Snapshot::new(vec![expense(1, 3, 100), expense(2, 20, 70)], vec![food_budget()]);
        let service = AlertService::new(&snapshot);

        let evaluation = service.evaluate(&snapshot.budgets()[0]);
        assert_eq!(evaluation.row.spent, money(170));
        assert_eq!(evaluation.row.remaining, money(30));
        assert_eq!(evaluation.row.status, AlertStatus::NearLimit);
        assert_eq!(evaluation.alert.unwrap().status, AlertStatus::NearLimit);
    }

    #[test]
    fn test_is_budget_exceeded() {
        let snapshot = Snapshot::new(vec![expense(1, 3, 200)], vec![food_budget()]);
        let service = AlertService::new(&snapshot);

        assert!(service.is_budget_exceeded(OwnerId::new(1), &food(), june()));
        assert!(!service.is_budget_exceeded(OwnerId::new(1), &food(), june().next()));
        assert!(!service.is_budget_exceeded(
            OwnerId::new(1),
            &CategoryId::new("Transport").unwrap(),
            june()
        ));
    }

    #[test]
    fn test_check_pending_expense() {
        let snapshot = Snapshot::new(vec![expense(1, 3, 150)], vec![food_budget()]);
        let service = AlertService::new(&snapshot);
        let owner = OwnerId::new(1);
        let date = NaiveDate::from_ymd_opt(2024, 6, 25).unwrap();

        // 150 + 5 stays under 80%
        assert!(service.check_pending_expense(owner, &food(), date, money(5)).is_none());

        let near = service
            .check_pending_expense(owner, &food(), date, money(20))
            .unwrap();
        assert_eq!(near.status, AlertStatus::NearLimit);
        assert_eq!(near.spent, money(170));

        let over = service
            .check_pending_expense(owner, &food(), date, money(60))
            .unwrap();
        assert_eq!(over.status, AlertStatus::Exceeded);
        assert_eq!(over.message, "Budget exceeded for Food by $10.00 (105.0% of limit)");

        // July has no budget
        let july = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert!(service.check_pending_expense(owner, &food(), july, money(500)).is_none());
    }
}
