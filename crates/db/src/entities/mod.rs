//! `SeaORM` entity definitions.

pub mod authors;
pub mod budget_records;
pub mod sea_orm_active_enums;
