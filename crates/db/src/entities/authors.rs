//! `SeaORM` Entity for author table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_records::Entity")]
    BudgetRecords,
}

impl Related<super::budget_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
