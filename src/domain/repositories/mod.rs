//! Store trait definitions for the domain layer.
//!
//! The key-value namespace is abstracted behind [`LinkStore`]. Implementations
//! live in `crate::infrastructure::persistence`; a `mockall` mock is generated
//! for unit tests.
//!
//! # Testing
//!
//! See `tests/handler_*.rs` for end-to-end usage against the in-memory store.

pub mod link_store;

pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use link_store::MockLinkStore;
