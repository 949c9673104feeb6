//! Handler for recent links endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::application::services::link_service::DEFAULT_RECENT_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

/// Returns the most recently created links, newest first.
///
/// # Endpoint
///
/// `GET /api/recent?limit=10`
///
/// `limit` defaults to 10 and must be in [1..100].
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is out of range.
pub async fn recent_handler(
    State(state): State<AppState>,
    Query(q): Query<RecentQuery>,
) -> Result<Json<Vec<StatsResponse>>, AppError> {
    let limit = match q.limit {
        None => DEFAULT_RECENT_LIMIT,
        Some(l) if (1..=100).contains(&l) => l as i64,
        Some(_) => {
            return Err(AppError::bad_request(
                "limit must be in [1..100]",
                json!({ "field": "limit", "min": 1, "max": 100 }),
            ));
        }
    };

    let links = state.link_service.recent(limit).await?;

    let items = links
        .into_iter()
        .map(|link| StatsResponse::from_link(link, &state))
        .collect();

    Ok(Json(items))
}
