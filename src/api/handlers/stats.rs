//! Handler for link statistics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record snapshot for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Read-only; does not touch the click counter.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_code": "aB3x9Z",
///   "created_at": "2025-08-10T12:00:00Z",
///   "click_count": 42,
///   "short_url": "http://localhost:3000/aB3x9Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;

    Ok(Json(StatsResponse::from_link(link, &state)))
}
