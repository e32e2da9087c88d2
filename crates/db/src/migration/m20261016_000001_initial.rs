//! Initial database migration.
//!
//! Creates the `author` and `budget` tables. Built with the schema builder so
//! the same migration runs on PostgreSQL and SQLite.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Author::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Author::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Author::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Budget::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budget::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Budget::Year).integer().not_null())
                    .col(ColumnDef::new(Budget::Month).integer().not_null())
                    .col(ColumnDef::new(Budget::Amount).integer().not_null())
                    .col(ColumnDef::new(Budget::Type).string_len(16).not_null())
                    .col(ColumnDef::new(Budget::AuthorId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_author")
                            .from(Budget::Table, Budget::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Year statistics always filter on year and sort on month
        manager
            .create_index(
                Index::create()
                    .name("idx_budget_year_month")
                    .table(Budget::Table)
                    .col(Budget::Year)
                    .col(Budget::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budget::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Author {
    Table,
    Id,
    FullName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Budget {
    Table,
    Id,
    Year,
    Month,
    Amount,
    Type,
    AuthorId,
}
