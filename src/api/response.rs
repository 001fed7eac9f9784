//! The three response shapes the service produces.
//!
//! Every handler and every [`crate::AppError`] goes through one of these, so
//! content types stay consistent across endpoints.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// JSON body with `Content-Type: application/json`.
pub fn json<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Plain text body with `Content-Type: text/plain`.
pub fn text(status: StatusCode, body: impl Into<String>) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body.into()).into_response()
}

/// `302 Found` pointing at `location`, with an empty body.
///
/// Stored targets are never validated, so a value that cannot be carried in a
/// header (control characters) is reported as a store error.
pub fn redirect(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_bytes(location.as_bytes()).map_err(|_| {
        AppError::store("Stored target URL cannot be used as a redirect location")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response() {
        let response = json(StatusCode::CREATED, json!({ "message": "ok" }));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_text_response() {
        let response = text(StatusCode::CONFLICT, "Conflict");

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
    }

    #[test]
    fn test_redirect_response() {
        let response = redirect("https://example.com/a?b=c").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn test_redirect_keeps_non_ascii_target() {
        let response = redirect("https://example.com/café").unwrap();

        assert_eq!(
            response.headers()[header::LOCATION].as_bytes(),
            "https://example.com/café".as_bytes()
        );
    }

    #[test]
    fn test_redirect_rejects_control_characters() {
        let err = redirect("https://example.com/\r\nSet-Cookie: x").unwrap_err();

        assert!(matches!(err, AppError::Store { .. }));
    }
}
