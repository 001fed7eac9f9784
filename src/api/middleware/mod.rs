//! HTTP middleware wrapping the dispatcher.
//!
//! - [`require_secret`] - refuses all traffic while `API_KEY` is unset
//! - [`tracing`] - structured request/response logging

pub mod require_secret;
pub mod tracing;
