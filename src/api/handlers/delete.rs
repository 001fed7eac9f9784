//! Handler for link deletion.

use axum::{http::StatusCode, response::Response};

use crate::api::dto::DeleteLinkResponse;
use crate::api::response;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::key_codec::decode_key;

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/delete/{id}`
///
/// `{id}` is everything after `/api/delete/`, percent-decoded, so a
/// namespaced id can be sent either as `yt/video` or `yt%2Fvideo`.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is empty or badly encoded.
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_link_handler(state: &AppState, encoded_id: &str) -> Result<Response, AppError> {
    if encoded_id.is_empty() {
        return Err(AppError::bad_request(
            "Invalid delete path - missing short ID",
        ));
    }

    let short_id = decode_key(encoded_id)?;
    state.link_service.delete(&short_id).await?;

    Ok(response::json(
        StatusCode::OK,
        DeleteLinkResponse::for_short_id(&short_id),
    ))
}
