//! Database enums stored as strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::budget::BudgetType as CoreBudgetType;

/// Budget record category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BudgetType {
    /// Money coming in.
    #[sea_orm(string_value = "Income")]
    Income,
    /// Money going out.
    #[sea_orm(string_value = "Expense")]
    Expense,
    /// Fees charged on top of other movements.
    #[sea_orm(string_value = "Commission")]
    Commission,
}

impl From<CoreBudgetType> for BudgetType {
    fn from(value: CoreBudgetType) -> Self {
        match value {
            CoreBudgetType::Income => Self::Income,
            CoreBudgetType::Expense => Self::Expense,
            CoreBudgetType::Commission => Self::Commission,
        }
    }
}

impl From<BudgetType> for CoreBudgetType {
    fn from(value: BudgetType) -> Self {
        match value {
            BudgetType::Income => Self::Income,
            BudgetType::Expense => Self::Expense,
            BudgetType::Commission => Self::Commission,
        }
    }
}
