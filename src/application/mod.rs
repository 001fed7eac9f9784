//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`] trait and
//! give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Create, resolve, list and delete links
//! - [`services::auth_service::AuthService`] - Shared-secret check for `/api/*`

pub mod services;
