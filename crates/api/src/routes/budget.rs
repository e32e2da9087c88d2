//! Budget record routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Deserialize;
use tally_core::budget::{BudgetRecord, BudgetResponse, BudgetType, YearStats, YearStatsQuery};
use tally_db::BudgetRepository;
use tally_shared::types::{
    PageRequest,
    pagination::{MAX_LIMIT, MAX_OFFSET},
};
use tracing::error;
use validator::Validate;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ValidatedJson, ValidatedQuery},
};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget/add", post(add_record))
        .route("/budget/year/{year}/stats", get(year_stats))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for adding a budget record.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRecordRequest {
    /// Calendar year.
    #[validate(range(min = 1900, message = "must be 1900 or later"))]
    pub year: i32,
    /// Month of the year.
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub month: i32,
    /// Amount in minor currency units.
    #[validate(range(min = 1, message = "must be positive"))]
    pub amount: i32,
    /// Category.
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    /// Author reference.
    #[serde(default)]
    pub author_id: Option<i32>,
}

impl From<AddRecordRequest> for BudgetRecord {
    fn from(request: AddRecordRequest) -> Self {
        Self {
            year: request.year,
            month: request.month,
            amount: request.amount,
            budget_type: request.budget_type,
            author_id: request.author_id,
        }
    }
}

/// Query parameters for year statistics.
#[derive(Debug, Deserialize, Validate)]
pub struct YearStatsParams {
    /// Page size for `items`.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_LIMIT, message = "must be between 1 and 1000"))]
    pub limit: u64,
    /// Number of items to skip.
    #[serde(default)]
    #[validate(range(max = MAX_OFFSET, message = "must be at most 9223372036854775807"))]
    pub offset: u64,
    /// Case-insensitive author full-name filter.
    pub author: Option<String>,
}

fn default_limit() -> u64 {
    PageRequest::default().limit()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/budget/add` - Persist one budget record.
async fn add_record(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddRecordRequest>,
) -> Result<Json<BudgetResponse>, ApiError> {
    let repo = BudgetRepository::new((*state.db).clone());

    let response = repo.add_record(request.into()).await.map_err(|e| {
        error!(error = %e, "Failed to add budget record");
        ApiError::from(e)
    })?;

    Ok(Json(response))
}

/// GET `/budget/year/{year}/stats` - Totals and one page of records for a year.
async fn year_stats(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    ValidatedQuery(params): ValidatedQuery<YearStatsParams>,
) -> Result<Json<YearStats>, ApiError> {
    let repo = BudgetRepository::new((*state.db).clone());
    let query = YearStatsQuery {
        year,
        author: params.author,
        page: PageRequest::new(params.limit, params.offset),
    };

    let stats = repo.get_year_stats(&query).await.map_err(|e| {
        error!(error = %e, year, "Failed to compute year statistics");
        ApiError::from(e)
    })?;

    Ok(Json(stats))
}
