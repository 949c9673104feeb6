//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/aB3x9Z",
///   "original_url": "https://example.com/some/page",
///   "short_code": "aB3x9Z"
/// }
/// ```
///
/// Submitting a URL that was shortened before returns the existing code;
/// no duplicate record is created.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is empty or malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.link_service.shorten(&payload.url).await?;

    let short_url = state.short_url(&link.short_code);

    Ok(Json(ShortenResponse {
        short_url,
        original_url: link.original_url,
        short_code: link.short_code,
    }))
}
