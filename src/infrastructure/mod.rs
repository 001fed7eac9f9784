//! Infrastructure layer for external integrations.
//!
//! Provides the concrete key-value namespaces behind the domain's
//! [`crate::domain::repositories::LinkStore`] trait.
//!
//! # Modules
//!
//! - [`persistence`] - Redis and in-memory link stores

pub mod persistence;
