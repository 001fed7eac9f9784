//! Handler for public short link redirects.

use axum::response::Response;

use crate::api::response;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its target.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The short id is the path with its leading `/` removed and is **not**
/// percent-decoded, so `/gh/repo` looks up `gh/repo` while `/gh%2Frepo`
/// looks up the literal `gh%2Frepo`.
///
/// # Response
///
/// `302 Found` with `Location: <target_url>`.
///
/// # Errors
///
/// Returns 400 Bad Request if the short id is empty.
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn redirect_handler(state: &AppState, short_id: &str) -> Result<Response, AppError> {
    if short_id.is_empty() {
        return Err(AppError::bad_request("Missing short ID"));
    }

    let target_url = state.link_service.resolve(short_id).await?;

    response::redirect(&target_url)
}
