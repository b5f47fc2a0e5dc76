//! Near-duplicate detection: shingling → MinHash signatures → pairwise elimination.

pub mod eliminator;
pub mod shingle;
pub mod signature;

pub use eliminator::{DuplicatePair, NearDuplicateEliminator};
pub use shingle::shingles;
pub use signature::{similarity, Signature, SignatureEngine};
