//! Handler for listing every link.

use axum::{http::StatusCode, response::Response};

use crate::api::response;
use crate::error::AppError;
use crate::state::AppState;

/// Returns all stored links.
///
/// # Endpoint
///
/// `GET /api/list`
///
/// # Response
///
/// `200 OK` with a JSON object mapping each short id to its target:
///
/// ```json
/// { "gh/repo": "https://github.com/x/repo", "docs": "https://example.com/docs" }
/// ```
///
/// Values are read one key at a time after listing; a link removed in between
/// shows up as `null`.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn list_links_handler(state: &AppState) -> Result<Response, AppError> {
    let links = state.link_service.list().await?;

    Ok(response::json(StatusCode::OK, links))
}
