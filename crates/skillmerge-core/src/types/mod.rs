//! Data model and collection types for skillmerge.

pub mod collections;
pub mod conflict;
pub mod document;
pub mod hashing;

pub use collections::{FxHashMap, FxHashSet};
pub use conflict::{Conflict, ResolutionStrategy};
pub use document::{Document, Section};
pub use hashing::HashAlgorithm;
