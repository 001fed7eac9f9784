//! Top-level router.
//!
//! There is no per-path route table: every request reaches
//! [`crate::api::dispatch::dispatch`], which classifies it itself. See that
//! module for the precedence rules.
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Secret gate** - `500` for every request while `API_KEY` is unset
//! - **Authorization** - checked inside dispatch for `/api/*` only

use crate::api::dispatch::dispatch;
use crate::api::middleware::{require_secret, tracing};
use crate::state::AppState;
use axum::{Router, middleware};

/// Constructs the application router.
///
/// No path normalization is applied: trailing slashes are significant because
/// short ids may contain `/`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_secret::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
