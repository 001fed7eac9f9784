//! Key-value store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::LinkStore`].
//!
//! # Stores
//!
//! - [`RedisLinkStore`] - durable namespace in Redis (atomic `SETNX` creation)
//! - [`MemoryLinkStore`] - process-local map for development and tests

pub mod memory_link_store;
pub mod redis_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use redis_link_store::RedisLinkStore;
