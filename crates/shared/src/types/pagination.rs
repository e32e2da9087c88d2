//! Pagination parameters for list queries.

use serde::{Deserialize, Serialize};

/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 1000;

/// Largest offset a client may request. SQL drivers bind OFFSET as a signed
/// 64-bit integer.
pub const MAX_OFFSET: u64 = 9_223_372_036_854_775_807;

/// Offset-based window over a sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items in the page.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of items to skip before the page starts.
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
