//! # skillmerge-core
//!
//! Foundation crate for the skillmerge document merge engine.
//! Defines the document model, config, errors, tracing setup, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SkillMergeConfig;
pub use errors::ConfigError;
pub use types::{Conflict, Document, HashAlgorithm, ResolutionStrategy, Section};
