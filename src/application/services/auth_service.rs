//! Shared-secret authorization for the management API.

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::AppError;

/// Message returned on every request while no secret is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Server not configured with an API_KEY";

type SecretDigest = [u8; 32];

fn digest(value: &str) -> SecretDigest {
    Sha256::digest(value.as_bytes()).into()
}

/// Gate comparing the raw `Authorization` header against one configured secret.
///
/// There is no scheme prefix: the whole header value must equal the secret.
/// Both sides are reduced to SHA-256 digests before comparing, so the compared
/// bytes do not reveal how much of the secret a guess got right.
pub struct AuthService {
    secret: Option<SecretDigest>,
}

impl AuthService {
    /// Creates the gate. `None` or an empty secret leaves the service unconfigured.
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            secret: api_key.filter(|key| !key.is_empty()).map(digest),
        }
    }

    /// Returns true once a secret is available.
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks the request's `Authorization` header.
    ///
    /// A missing header, or one that is not valid header text, is compared as
    /// the empty string and therefore never matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if no secret is configured.
    /// Returns [`AppError::Unauthorized`] on any mismatch.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let Some(expected) = &self.secret else {
            return Err(AppError::configuration(NOT_CONFIGURED_MESSAGE));
        };

        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if digest(presented) != *expected {
            warn!(
                header_present = !presented.is_empty(),
                "Rejected management request"
            );
            return Err(AppError::unauthorized("Unauthorized"));
        }

        Ok(())
    }
}
