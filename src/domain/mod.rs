//! Domain layer: the link entity and the key-value store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - The [`repositories::LinkStore`] trait implemented by
//!   `crate::infrastructure::persistence`
//!
//! The domain layer has no dependencies on HTTP or on a concrete store.

pub mod entities;
pub mod repositories;
