//! Budget data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_shared::types::PageRequest;

/// Budget record category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Fees charged on top of other movements.
    Commission,
}

impl BudgetType {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Income, Self::Expense, Self::Commission];

    /// Category name as stored and as used for `total_by_type` keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Commission => "Commission",
        }
    }
}

/// A candidate budget record, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: i32,
    /// Amount in minor currency units.
    pub amount: i32,
    /// Category.
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    /// Author reference, if any.
    #[serde(default)]
    pub author_id: Option<i32>,
}

/// A persisted budget record as returned after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResponse {
    /// Storage-assigned identity.
    pub id: i32,
    /// Calendar year.
    pub year: i32,
    /// Month of the year.
    pub month: i32,
    /// Amount in minor currency units.
    pub amount: i32,
    /// Category.
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    /// Author reference, if any.
    pub author_id: Option<i32>,
    /// Author display name, resolved from `author_id`.
    pub author_name: Option<String>,
}

/// One row of the year statistics listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Calendar year.
    pub year: i32,
    /// Month of the year.
    pub month: i32,
    /// Amount in minor currency units.
    pub amount: i32,
    /// Category.
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    /// Author display name, absent for records without an author.
    pub author_name: Option<String>,
}

/// Parameters of a year statistics query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YearStatsQuery {
    /// Year to report on.
    pub year: i32,
    /// Case-insensitive author full-name filter. Empty means no filter.
    pub author: Option<String>,
    /// Window applied to `items` only.
    pub page: PageRequest,
}

impl YearStatsQuery {
    /// Creates a query for `year` with no author filter and the default page.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Restricts the query to one author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the listing window.
    #[must_use]
    pub const fn with_page(mut self, limit: u64, offset: u64) -> Self {
        self.page = PageRequest::new(limit, offset);
        self
    }

    /// Author name to filter on, or `None` when the filter is absent or
    /// empty. Case folding happens in the database, on both sides of the
    /// comparison.
    #[must_use]
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|name| !name.is_empty())
    }
}

/// Aggregates over the filtered set plus one page of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearStats {
    /// Number of matching records, ignoring pagination.
    pub total: u64,
    /// Sum of `amount` per category name over all matching records.
    pub total_by_type: BTreeMap<String, i64>,
    /// The requested page of matching records.
    pub items: Vec<BudgetItem>,
}
