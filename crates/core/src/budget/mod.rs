//! Budget records and year statistics.

pub mod service;
pub mod types;


pub use service::BudgetService;
pub use types::{BudgetItem, BudgetRecord, BudgetResponse, BudgetType, YearStats, YearStatsQuery};
