use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::LinkStore;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    /// Name shown on the informational page.
    pub site_name: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>, api_key: Option<&str>, site_name: &str) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
            auth_service: Arc::new(AuthService::new(api_key)),
            site_name: Arc::from(site_name),
        }
    }
}
