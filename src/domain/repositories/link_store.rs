//! Key-value store contract for short links.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the underlying key-value namespace.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// A durable key-value namespace mapping short ids to target URLs.
///
/// Only single-key atomicity is assumed. There are no multi-key transactions,
/// so callers that need "create only if absent" semantics must go through
/// [`LinkStore::put_if_absent`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisLinkStore`] - Redis namespace
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Short backend label used in startup logs.
    fn backend_name(&self) -> &'static str;

    /// Looks up the value stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, silently replacing any existing value.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Writes `value` only if `key` holds nothing. Returns `true` if written.
    ///
    /// The default is check-then-write: two concurrent callers can both see
    /// the key as absent and both write, and the last writer wins. Backends
    /// with a conditional write primitive override this to make it atomic.
    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        if self.get(key).await?.is_some() {
            return Ok(false);
        }
        self.put(key, value).await?;
        Ok(true)
    }

    /// Removes `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Returns every stored key, in no particular order.
    async fn list_keys(&self) -> StoreResult<Vec<String>>;
}
