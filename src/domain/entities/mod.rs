//! Core domain entities.
//!
//! - [`Link`] - A `short_id` to `target_url` mapping

pub mod link;

pub use link::Link;
