//! Author repository for database operations.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect, Set,
};
use tracing::info;

use crate::entities::authors;

/// Author repository. Budget records only reference authors; this is where
/// they are created and looked up.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    db: DatabaseConnection,
}

impl AuthorRepository {
    /// Creates a new author repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new author.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, full_name: &str) -> Result<authors::Model, DbErr> {
        let author = authors::ActiveModel {
            full_name: Set(full_name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(author_id = author.id, "Author created");
        Ok(author)
    }

    /// Looks up an author's display name on `conn`, which may be an open
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn full_name<C>(conn: &C, id: i32) -> Result<Option<String>, DbErr>
    where
        C: ConnectionTrait,
    {
        authors::Entity::find_by_id(id)
            .select_only()
            .column(authors::Column::FullName)
            .into_tuple()
            .one(conn)
            .await
    }
}
