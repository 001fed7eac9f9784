//! Utility functions shared across layers.
//!
//! - [`key_codec`] - Path segment to storage key conversion

pub mod key_codec;
