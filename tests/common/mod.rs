#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use kvlink::domain::repositories::{LinkStore, StoreError, StoreResult};
use kvlink::infrastructure::persistence::MemoryLinkStore;
use kvlink::routes::app_router;
use kvlink::state::AppState;
use std::sync::Arc;

pub const API_KEY: &str = "test-secret";

/// A running router plus a handle on its store for seeding and inspection.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryLinkStore>,
}

pub fn create_test_state(store: Arc<MemoryLinkStore>, api_key: Option<&str>) -> AppState {
    AppState::new(store, api_key, "kvlink-test")
}

pub fn make_server() -> TestApp {
    let store = Arc::new(MemoryLinkStore::new());
    let state = create_test_state(store.clone(), Some(API_KEY));
    let server = TestServer::new(app_router(state)).unwrap();

    TestApp { server, store }
}

/// Server whose `API_KEY` was never set.
pub fn make_unconfigured_server() -> TestApp {
    let store = Arc::new(MemoryLinkStore::new());
    let state = create_test_state(store.clone(), None);
    let server = TestServer::new(app_router(state)).unwrap();

    TestApp { server, store }
}

/// Store whose every operation fails as if the backend were down.
pub struct FailingLinkStore;

#[async_trait]
impl LinkStore for FailingLinkStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn make_failing_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingLinkStore), Some(API_KEY), "kvlink-test");
    TestServer::new(app_router(state)).unwrap()
}

pub async fn seed_link(store: &MemoryLinkStore, short_id: &str, target_url: &str) {
    store.put(short_id, target_url).await.unwrap();
}

pub async fn stored_target(store: &MemoryLinkStore, short_id: &str) -> Option<String> {
    store.get(short_id).await.unwrap()
}
