//! # kvlink
//!
//! A minimal URL shortener: short, human-chosen ids mapped to target URLs in a
//! key-value namespace, served as public redirects plus a small management API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and the
//!   [`domain::repositories::LinkStore`] trait
//! - **Application Layer** ([`application`]) - Link semantics and the shared-secret gate
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Route classification, handlers, responses
//! - **Client** ([`client`]) - HTTP client used by the `linkctl` binary
//!
//! ## HTTP Surface
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | `POST` | `/api/create` | `Authorization: <API_KEY>` |
//! | `GET` | `/api/list` | `Authorization: <API_KEY>` |
//! | `DELETE` | `/api/delete/{id}` | `Authorization: <API_KEY>` |
//! | any | `/` | none |
//! | `GET` | `/{short_id}` | none |
//!
//! Short ids may contain `/` (`/gh/repo`). The delete endpoint percent-decodes
//! its id; create and redirect use ids literally.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY="change-me"
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryLinkStore, RedisLinkStore};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
