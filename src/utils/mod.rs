//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug derivation for submitted resources

pub mod slug;
