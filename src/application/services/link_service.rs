//! Link creation, lookup, listing and deletion.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};
use crate::error::AppError;

/// Service implementing link semantics on top of a [`LinkStore`].
///
/// Handlers never talk to the store directly. The service turns store results
/// into the user-facing conflict / not-found errors.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Label of the backing store, for logging.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Stores a new link.
    ///
    /// Uses [`LinkStore::put_if_absent`], so creation is atomic on stores that
    /// offer a conditional write and best-effort check-then-write otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short id is already taken.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn create(&self, link: Link) -> Result<Link, AppError> {
        let written = self
            .store
            .put_if_absent(&link.short_id, &link.target_url)
            .await?;

        if !written {
            warn!(short_id = %link.short_id, "Refusing to overwrite existing link");
            return Err(AppError::conflict(format!(
                "Conflict: '{}' already exists",
                link.short_id
            )));
        }

        info!(
            short_id = %link.short_id,
            namespaced = link.is_namespaced(),
            namespace = link.namespace(),
            "Link created"
        );
        Ok(link)
    }

    /// Resolves a short id to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is stored under `short_id`.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        match self.store.get(short_id).await? {
            Some(target_url) if !target_url.is_empty() => {
                debug!(short_id, "Resolved link");
                Ok(target_url)
            }
            _ => {
                debug!(short_id, "Unknown short id");
                Err(AppError::not_found("Not Found"))
            }
        }
    }

    /// Returns every stored link as `short_id -> target_url`.
    ///
    /// Each key is read individually after listing, so a key deleted between
    /// the listing and its read is reported with a `None` value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if listing or any read fails.
    pub async fn list(&self) -> Result<BTreeMap<String, Option<String>>, AppError> {
        let listing_error = |e: StoreError| {
            error!(error = %e, "Failed to list links");
            AppError::store(format!("Error listing links: {e}"))
        };

        let keys = self.store.list_keys().await.map_err(listing_error)?;
        let mut links = BTreeMap::new();
        for key in keys {
            let value = self.store.get(&key).await.map_err(listing_error)?;
            links.insert(key, value);
        }

        debug!(count = links.len(), "Listed links");
        Ok(links)
    }

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is stored under `short_id`;
    /// the store is left untouched in that case.
    pub async fn delete(&self, short_id: &str) -> Result<(), AppError> {
        let existing = self.store.get(short_id).await?;
        if existing.is_none_or(|v| v.is_empty()) {
            return Err(AppError::not_found(format!(
                "Not Found: '{short_id}' does not exist"
            )));
        }

        self.store.delete(short_id).await?;
        info!(short_id, "Link deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;

    fn service(mock: MockLinkStore) -> LinkService {
        LinkService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock = MockLinkStore::new();
        mock.expect_put_if_absent()
            .withf(|key, value| key == "gh/repo" && value == "https://github.com/x/repo")
            .times(1)
            .returning(|_, _| Ok(true));

        let link = service(mock)
            .create(Link::new("gh/repo", "https://github.com/x/repo"))
            .await
            .unwrap();

        assert_eq!(link.short_id, "gh/repo");
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let mut mock = MockLinkStore::new();
        mock.expect_put_if_absent()
            .times(1)
            .returning(|_, _| Ok(false));
        mock.expect_put().times(0);

        let result = service(mock)
            .create(Link::new("taken", "https://example.com"))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Conflict: 'taken' already exists");
    }

    #[tokio::test]
    async fn test_create_store_failure() {
        let mut mock = MockLinkStore::new();
        mock.expect_put_if_absent()
            .returning(|_, _| Err(StoreError::Unavailable("down".to_string())));

        let result = service(mock)
            .create(Link::new("a", "https://example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Store { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock = MockLinkStore::new();
        mock.expect_get()
            .withf(|key| key == "abc")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let target = service(mock).resolve("abc").await.unwrap();

        assert_eq!(target, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let mut mock = MockLinkStore::new();
        mock.expect_get().times(1).returning(|_| Ok(None));

        let result = service(mock).resolve("nope").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_reads_each_key() {
        let mut mock = MockLinkStore::new();
        mock.expect_list_keys()
            .times(1)
            .returning(|| Ok(vec!["b".to_string(), "a".to_string()]));
        mock.expect_get()
            .times(2)
            .returning(|key| Ok(Some(format!("https://example.com/{key}"))));

        let links = service(mock).list().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links["a"].as_deref(), Some("https://example.com/a"));
    }

    #[tokio::test]
    async fn test_list_reports_vanished_key_as_none() {
        let mut mock = MockLinkStore::new();
        mock.expect_list_keys()
            .returning(|| Ok(vec!["gone".to_string()]));
        mock.expect_get().returning(|_| Ok(None));

        let links = service(mock).list().await.unwrap();

        assert_eq!(links.get("gone"), Some(&None));
    }

    #[tokio::test]
    async fn test_list_store_failure() {
        let mut mock = MockLinkStore::new();
        mock.expect_list_keys()
            .returning(|| Err(StoreError::Operation("SCAN failed".to_string())));

        let err = service(mock).list().await.unwrap_err();

        assert!(matches!(err, AppError::Store { .. }));
        assert!(err.to_string().starts_with("Error listing links:"));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut mock = MockLinkStore::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));
        mock.expect_delete()
            .withf(|key| key == "yt/video")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock).delete("yt/video").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_untouched() {
        let mut mock = MockLinkStore::new();
        mock.expect_get().times(1).returning(|_| Ok(None));
        mock.expect_delete().times(0);

        let err = service(mock).delete("ghost").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not Found: 'ghost' does not exist");
    }
}
