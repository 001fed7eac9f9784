//! Data Transfer Objects for API request/response serialization.

pub mod create_link;
pub mod delete_link;

pub use create_link::{CreateLinkRequest, CreateLinkResponse};
pub use delete_link::DeleteLinkResponse;
