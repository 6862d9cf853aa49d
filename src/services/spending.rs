//! Spending aggregation
//!
//! Sums expense amounts per owner, category and period over a snapshot.

use std::collections::BTreeMap;

use crate::models::{CategoryId, Money, OwnerId, Period, Transaction};
use crate::storage::Snapshot;

/// Service computing spend totals from a snapshot
pub struct SpendingService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> SpendingService<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// The owner's expenses dated within the period
    fn expenses_in_period(
        &self,
        owner: OwnerId,
        period: Period,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        let (start, end) = period.bounds();
        self.snapshot.transactions().iter().filter(move |t| {
            t.owner_id == owner && t.is_expense() && t.date >= start && t.date <= end
        })
    }

    /// Total expenses recorded for a category in a period; zero when nothing matches
    pub fn spent_for_category_in_period(
        &self,
        owner: OwnerId,
        category: &CategoryId,
        period: Period,
    ) -> Money {
        let spent: Money = self
            .expenses_in_period(owner, period)
            .filter(|t| &t.category == category)
            .map(|t| t.amount)
            .sum();

        tracing::debug!(owner = %owner, category = %category, period = %period, spent = %spent, "aggregated spend");
        spent
    }

    /// Expense totals per category for a period
    pub fn totals_by_category(&self, owner: OwnerId, period: Period) -> BTreeMap<CategoryId, Money> {
        let mut totals: BTreeMap<CategoryId, Money> = BTreeMap::new();
        for txn in self.expenses_in_period(owner, period) {
            *totals.entry(txn.category.clone()).or_default() += txn.amount;
        }
        totals
    }
}
