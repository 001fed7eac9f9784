//! Fail-closed gate for an unconfigured deployment.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::services::auth_service::NOT_CONFIGURED_MESSAGE;
use crate::{error::AppError, state::AppState};

/// Refuses every request with `500` while no `API_KEY` is configured.
///
/// Applied to the whole router, ahead of dispatch, so the landing page and
/// redirects are refused as well as the management API.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .fallback(dispatch)
///     .layer(middleware::from_fn_with_state(state.clone(), require_secret::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.auth_service.is_configured() {
        tracing::error!(
            method = %req.method(),
            path = %req.uri().path(),
            "Refusing request: API_KEY is not configured"
        );
        return Err(AppError::configuration(NOT_CONFIGURED_MESSAGE));
    }

    Ok(next.run(req).await)
}
