//! Budget lookup
//!
//! Resolves the active budget for an owner, category and period. Stores are
//! expected to hold at most one such budget; when they hold several, the one
//! with the highest id (the most recently created) wins.

use std::collections::HashSet;

use crate::models::{Budget, CategoryId, OwnerId, Period};
use crate::storage::{BudgetScope, Snapshot};

/// Service for budget lookups over a snapshot
pub struct BudgetService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> BudgetService<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// The active budget for an owner, category and period, if any
    pub fn budget_for(
        &self,
        owner: OwnerId,
        category: &CategoryId,
        period: Period,
    ) -> Option<&'a Budget> {
        let mut candidates = self
            .snapshot
            .budgets()
            .iter()
            .filter(|b| b.matches(owner, category, period));

        let first = candidates.next()?;
        let mut duplicates = 0usize;
        let winner = candidates.fold(first, |best, b| {
            duplicates += 1;
            if b.id > best.id {
                b
            } else {
                best
            }
        });

        if duplicates > 0 {
            tracing::warn!(
                owner = %owner,
                category = %category,
                period = %period,
                candidates = duplicates + 1,
                chosen = %winner.id,
                "multiple active budgets; using the most recent"
            );
        }

        Some(winner)
    }

    /// Active budgets in scope, one per (category, period)
    ///
    /// Keeps snapshot order. Duplicates collapse to the [`budget_for`] winner,
    /// placed where the first of them appeared.
    ///
    /// [`budget_for`]: Self::budget_for
    pub fn budgets_in_scope(&self, owner: OwnerId, scope: BudgetScope) -> Vec<&'a Budget> {
        let mut seen: HashSet<(CategoryId, Period)> = HashSet::new();

        self.snapshot
            .budgets()
            .iter()
            .filter(|b| b.active && b.owner_id == owner && scope.includes(b.period))
            .filter(|b| seen.insert((b.category.clone(), b.period)))
            .filter_map(|b| self.budget_for(owner, &b.category, b.period))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Money};

    fn budget(id: u64, owner: u64, category: &str, period: Period, units: i64) -> Budget {
        Budget::new(
            BudgetId::new(id),
            OwnerId::new(owner),
            CategoryId::new(category).unwrap(),
            Money::from_units(units),
            period,
        )
    }

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    #[test]
    fn test_budget_for_found() {
        let snapshot = Snapshot::new(Vec::new(), vec![budget(1, 1, "Food", june(), 200)]);
        let service = BudgetService::new(&snapshot);

        let found = service
            .budget_for(OwnerId::new(1), &CategoryId::new("Food").unwrap(), june())
            .unwrap();
        assert_eq!(found.limit, Money::from_units(200));
    }

    #[test]
    fn test_budget_for_missing_is_none() {
        let snapshot = Snapshot::new(Vec::new(), vec![budget(1, 1, "Food", june(), 200)]);
        let service = BudgetService::new(&snapshot);
        let owner = OwnerId::new(1);

        assert!(service
            .budget_for(owner, &CategoryId::new("Transport").unwrap(), june())
            .is_none());
        assert!(service
            .budget_for(owner, &CategoryId::new("Food").unwrap(), june().next())
            .is_none());
        assert!(service
            .budget_for(OwnerId::new(2), &CategoryId::new("Food").unwrap(), june())
            .is_none());
    }

    #[test]
    fn test_inactive_budget_ignored() {
        let mut inactive = budget(1, 1, "Food", june(), 200);
        inactive.deactivate();
        let snapshot = Snapshot::new(Vec::new(), vec![inactive]);

        assert!(BudgetService::new(&snapshot)
            .budget_for(OwnerId::new(1), &CategoryId::new("Food").unwrap(), june())
            .is_none());
    }

    #[test]
    fn test_duplicates_pick_highest_id_regardless_of_order() {
        let food = CategoryId::new("Food").unwrap();
        let orders = [
            vec![
                budget(3, 1, "Food", june(), 300),
                budget(7, 1, "Food", june(), 700),
                budget(5, 1, "Food", june(), 500),
            ],
            vec![
                budget(7, 1, "Food", june(), 700),
                budget(5, 1, "Food", june(), 500),
                budget(3, 1, "Food", june(), 300),
            ],
        ];

        for budgets in orders {
            let snapshot = Snapshot::new(Vec::new(), budgets);
            let chosen = BudgetService::new(&snapshot)
                .budget_for(OwnerId::new(1), &food, june())
                .unwrap();
            assert_eq!(chosen.id, BudgetId::new(7));
        }
    }

    #[test]
    fn test_budgets_in_scope_collapses_duplicates() {
        let snapshot = Snapshot::new(
            Vec::new(),
            vec![
                budget(2, 1, "Food", june(), 200),
                budget(1, 1, "Transport", june(), 80),
                budget(4, 1, "Food", june(), 250),
                budget(3, 1, "Food", june().prev(), 180),
                budget(9, 2, "Food", june(), 999),
            ],
        );
        let service = BudgetService::new(&snapshot);

        let ids: Vec<u64> = service
            .budgets_in_scope(OwnerId::new(1), BudgetScope::Period(june()))
            .iter()
            .map(|b| b.id.get())
            .collect();
        assert_eq!(ids, vec![4, 1]);

        let through: Vec<u64> = service
            .budgets_in_scope(OwnerId::new(1), BudgetScope::Through(june()))
            .iter()
            .map(|b| b.id.get())
            .collect();
        assert_eq!(through, vec![4, 1, 3]);
    }
}
