//! Application error type and its HTTP mapping.
//!
//! Every failure a request can hit is one [`AppError`] variant, and every
//! variant maps to exactly one status code. Errors are rendered as plain
//! text through [`crate::api::response::text`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::response;
use crate::domain::repositories::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The shared management secret is not set; blocks all traffic.
    #[error("{message}")]
    Configuration { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    MethodNotAllowed { message: String },
    /// The key-value namespace failed.
    #[error("{message}")]
    Store { message: String },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration { .. } | AppError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Link store operation failed");
        AppError::store(format!("Store error: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        response::text(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_has_its_own_status() {
        assert_eq!(
            AppError::configuration("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::method_not_allowed("x").status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::store("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let err: AppError = StoreError::Unavailable("connection refused".to_string()).into();

        assert!(matches!(err, AppError::Store { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = AppError::not_found("Not Found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
