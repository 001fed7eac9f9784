//! Handler for link creation.

use axum::{body::Bytes, http::StatusCode, response::Response};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::{CreateLinkRequest, CreateLinkResponse};
use crate::api::response;
use crate::error::AppError;
use crate::state::AppState;

const MISSING_FIELDS: &str = "Missing 'short_id' or 'target_url'";

/// Creates a new link.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// { "short_id": "yt/video", "target_url": "https://youtube.com/watch?v=x" }
/// ```
///
/// `short_id` is taken literally: no percent-decoding is applied.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "message": "Link created", "short_id": "yt/video", "target_url": "https://youtube.com/watch?v=x" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object with non-empty
/// string fields `short_id` and `target_url`.
/// Returns 409 Conflict if `short_id` already exists.
pub async fn create_link_handler(state: &AppState, body: Bytes) -> Result<Response, AppError> {
    let payload = parse_body(&body)?;
    payload
        .validate()
        .map_err(|_| AppError::bad_request(MISSING_FIELDS))?;
    let link = payload
        .into_link()
        .ok_or_else(|| AppError::bad_request(MISSING_FIELDS))?;

    let link = state.link_service.create(link).await?;

    Ok(response::json(
        StatusCode::CREATED,
        CreateLinkResponse::from(link),
    ))
}

/// Decodes the body, accepting only a JSON object.
fn parse_body(body: &[u8]) -> Result<CreateLinkRequest, AppError> {
    let parse_error = |e: serde_json::Error| AppError::bad_request(format!("Error parsing JSON: {e}"));

    let value: Value = serde_json::from_slice(body).map_err(parse_error)?;
    if !value.is_object() {
        return Err(AppError::bad_request(
            "Error parsing JSON: expected a JSON object",
        ));
    }

    serde_json::from_value(value).map_err(parse_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_object() {
        let req = parse_body(br#"{"short_id":"a","target_url":"b"}"#).unwrap();

        assert_eq!(req.short_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_parse_body_rejects_non_object() {
        for body in [&b"[]"[..], b"null", b"\"a\"", b"42"] {
            assert!(matches!(
                parse_body(body).unwrap_err(),
                AppError::Validation { .. }
            ));
        }
    }

    #[test]
    fn test_parse_body_rejects_invalid_json() {
        let err = parse_body(b"{not json").unwrap_err();

        assert!(err.to_string().starts_with("Error parsing JSON:"));
    }
}
