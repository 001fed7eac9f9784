//! HTTP layer: request classification, handlers and response shapes.
//!
//! # Modules
//!
//! - [`dispatch`] - [`dispatch::Route`] classification and the single entry handler
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - One handler per route
//! - [`middleware`] - Configuration gate and tracing
//! - [`response`] - JSON, plain text and redirect responses

pub mod dispatch;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
