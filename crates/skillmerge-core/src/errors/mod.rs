//! Error handling for skillmerge.
//! One error enum per concern, `thiserror` only, zero `anyhow`.
//!
//! Merging, deduplication, and conflict resolution are total over their
//! input domain, so configuration is the only fallible surface.

pub mod config_error;

pub use config_error::ConfigError;
