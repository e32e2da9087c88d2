//! Budget service for year statistics rules.

use std::collections::BTreeMap;

use super::types::{BudgetItem, BudgetType, YearStats};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Folds per-category sums into the `total_by_type` map.
    ///
    /// Repeated categories are added together, so callers may pass either
    /// pre-grouped sums or one entry per record.
    #[must_use]
    pub fn tally_by_type<I>(sums: I) -> BTreeMap<String, i64>
    where
        I: IntoIterator<Item = (BudgetType, i64)>,
    {
        sums.into_iter()
            .fold(BTreeMap::new(), |mut totals, (budget_type, amount)| {
                *totals.entry(budget_type.as_str().to_string()).or_insert(0) += amount;
                totals
            })
    }

    /// Assembles the statistics response.
    #[must_use]
    pub fn year_stats<I>(total: u64, sums: I, items: Vec<BudgetItem>) -> YearStats
    where
        I: IntoIterator<Item = (BudgetType, i64)>,
    {
        YearStats {
            total,
            total_by_type: Self::tally_by_type(sums),
            items,
        }
    }
}
