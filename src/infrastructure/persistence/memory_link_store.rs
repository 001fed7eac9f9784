//! Process-local link store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{LinkStore, StoreResult};

/// In-memory implementation of [`LinkStore`].
///
/// Used when no Redis namespace is configured and by the test suite. Contents
/// are lost when the process exits. `put_if_absent` is atomic because the
/// check and the write happen under one write lock.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}
