//! Author routes.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tally_db::AuthorRepository;
use tracing::error;
use validator::Validate;

use crate::{AppState, error::ApiError, extractors::ValidatedJson};

/// Creates the author routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/author/add", post(add_author))
}

/// Request body for adding an author.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAuthorRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub full_name: String,
}

/// Response for an author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    /// Author ID.
    pub id: i32,
    /// Display name.
    pub full_name: String,
    /// Created at timestamp.
    pub created_at: String,
}

/// POST `/author/add` - Create an author budget records can reference.
async fn add_author(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddAuthorRequest>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let repo = AuthorRepository::new((*state.db).clone());

    let author = repo.create(&request.full_name).await.map_err(|e| {
        error!(error = %e, "Failed to create author");
        ApiError::from(e)
    })?;

    Ok(Json(AuthorResponse {
        id: author.id,
        full_name: author.full_name,
        created_at: author.created_at.to_rfc3339(),
    }))
}
