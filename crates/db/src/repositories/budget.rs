//! Budget repository for record insertion and year statistics.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
    sea_query::{Expr, Func},
};
use tally_core::budget::{
    BudgetItem, BudgetRecord, BudgetResponse, BudgetService, YearStats, YearStatsQuery,
};
use tracing::{debug, info};

use super::AuthorRepository;
use crate::entities::{authors, budget_records, sea_orm_active_enums::BudgetType as DbBudgetType};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// The storage transaction failed.
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

/// Listing row joined with the author's display name.
#[derive(Debug, FromQueryResult)]
struct BudgetItemRow {
    year: i32,
    month: i32,
    amount: i32,
    budget_type: DbBudgetType,
    author_name: Option<String>,
}

impl From<BudgetItemRow> for BudgetItem {
    fn from(row: BudgetItemRow) -> Self {
        Self {
            year: row.year,
            month: row.month,
            amount: row.amount,
            budget_type: row.budget_type.into(),
            author_name: row.author_name,
        }
    }
}

/// Budget repository for record storage and statistics.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a budget record and returns it with its assigned id and the
    /// author's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when `author_id`
    /// does not reference an existing author.
    pub async fn add_record(&self, record: BudgetRecord) -> Result<BudgetResponse, BudgetError> {
        let txn = self.db.begin().await?;

        let model = budget_records::ActiveModel {
            year: Set(record.year),
            month: Set(record.month),
            amount: Set(record.amount),
            budget_type: Set(record.budget_type.into()),
            author_id: Set(record.author_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let author_name = match model.author_id {
            Some(author_id) => AuthorRepository::full_name(&txn, author_id).await?,
            None => None,
        };

        txn.commit().await?;

        info!(
            record_id = model.id,
            year = model.year,
            month = model.month,
            "Budget record added"
        );

        Ok(BudgetResponse {
            id: model.id,
            year: model.year,
            month: model.month,
            amount: model.amount,
            budget_type: model.budget_type.into(),
            author_id: model.author_id,
            author_name,
        })
    }

    /// Computes statistics for one year.
    ///
    /// `total` and `total_by_type` cover every matching record; only `items`
    /// is windowed by the query's page. All three are read in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the queries fail.
    pub async fn get_year_stats(&self, query: &YearStatsQuery) -> Result<YearStats, BudgetError> {
        let txn = self.db.begin().await?;
        let filtered = Self::filtered(query);

        let total = filtered.clone().count(&txn).await?;

        let sums: Vec<(DbBudgetType, i64)> = filtered
            .clone()
            .select_only()
            .column(budget_records::Column::BudgetType)
            .column_as(budget_records::Column::Amount.sum(), "total")
            .group_by(budget_records::Column::BudgetType)
            .into_tuple()
            .all(&txn)
            .await?;

        let rows: Vec<BudgetItemRow> = filtered
            .select_only()
            .column(budget_records::Column::Year)
            .column(budget_records::Column::Month)
            .column(budget_records::Column::Amount)
            .column_as(budget_records::Column::BudgetType, "budget_type")
            .column_as(authors::Column::FullName, "author_name")
            .order_by_asc(budget_records::Column::Month)
            .order_by_desc(budget_records::Column::Amount)
            .order_by_asc(budget_records::Column::Id)
            .offset(query.page.offset())
            .limit(query.page.limit())
            .into_model::<BudgetItemRow>()
            .all(&txn)
            .await?;

        txn.commit().await?;

        debug!(
            year = query.year,
            author = query.author.as_deref().unwrap_or_default(),
            total,
            page_len = rows.len(),
            "Year statistics computed"
        );

        let items = rows.into_iter().map(BudgetItem::from).collect();
        let sums = sums
            .into_iter()
            .map(|(budget_type, amount)| (budget_type.into(), amount));

        Ok(BudgetService::year_stats(total, sums, items))
    }

    /// Records of `query.year`, left-joined to their author and narrowed by
    /// the author filter when one is set.
    fn filtered(query: &YearStatsQuery) -> Select<budget_records::Entity> {
        let select = budget_records::Entity::find()
            .join(JoinType::LeftJoin, budget_records::Relation::Authors.def())
            .filter(budget_records::Column::Year.eq(query.year));

        match query.author_filter() {
            Some(author) => select.filter(
                Expr::expr(Func::lower(Expr::col((
                    authors::Entity,
                    authors::Column::FullName,
                ))))
                .eq(Func::lower(Expr::val(author))),
            ),
            None => select,
        }
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
