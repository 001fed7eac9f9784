//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/create`.
///
/// # Example
///
/// ```json
/// { "short_id": "gh/repo", "target_url": "https://github.com/x/repo" }
/// ```
///
/// Both fields are required and must be non-empty strings. `target_url` is not
/// checked for being a valid URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required, length(min = 1))]
    pub short_id: Option<String>,

    #[validate(required, length(min = 1))]
    pub target_url: Option<String>,
}

impl CreateLinkRequest {
    /// Converts a validated request into a [`Link`].
    ///
    /// Returns `None` if a field is missing; call `validate()` first.
    pub fn into_link(self) -> Option<Link> {
        Some(Link::new(self.short_id?, self.target_url?))
    }
}

/// Response body for a created link (`201 Created`).
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub message: &'static str,
    pub short_id: String,
    pub target_url: String,
}

impl From<Link> for CreateLinkResponse {
    fn from(link: Link) -> Self {
        Self {
            message: "Link created",
            short_id: link.short_id,
            target_url: link.target_url,
        }
    }
}
