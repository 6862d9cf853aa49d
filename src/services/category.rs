//! Category listing
//!
//! Categories are free text, so the known set is whatever the owner has
//! recorded plus the defaults offered when entering a budget.

use std::collections::BTreeSet;

use crate::models::{CategoryId, OwnerId};
use crate::storage::Snapshot;

/// The owner's recorded categories united with the defaults, sorted
pub fn known_categories(snapshot: &Snapshot, owner: OwnerId) -> Vec<CategoryId> {
    let mut known: BTreeSet<CategoryId> = CategoryId::defaults().into_iter().collect();

    known.extend(
        snapshot
            .transactions()
            .iter()
            .filter(|t| t.owner_id == owner)
            .map(|t| t.category.clone()),
    );
    known.extend(
        snapshot
            .budgets()
            .iter()
            .filter(|b| b.owner_id == owner)
            .map(|b| b.category.clone()),
    );

    known.into_iter().collect()
}
