//! DTO for the link deletion endpoint.

use serde::Serialize;

/// Response body for `DELETE /api/delete/{id}` (`200 OK`).
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: String,
}

impl DeleteLinkResponse {
    pub fn for_short_id(short_id: &str) -> Self {
        Self {
            message: format!("Deleted '{short_id}'"),
        }
    }
}
