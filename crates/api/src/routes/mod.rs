//! API route definitions.

use axum::{Router, http::Uri};
use tally_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod author;
pub mod budget;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(budget::routes())
        .merge(author::routes())
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!("No route for {uri}")))
}
