//! Informational landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Renders `templates/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `/` with any method. Served without authorization and without touching
/// the store.
pub async fn index_handler(site_name: &str) -> impl IntoResponse {
    IndexTemplate {
        site_name: site_name.to_string(),
    }
}
