//! # skillmerge-engine
//!
//! Merges N converter-produced documents into one.
//! MinHash near-duplicate elimination → metadata reconciliation → case-insensitive
//! section grouping, with conflict detection as a read-only diagnostic pass.
//!
//! Synchronous and I/O-free. Every engine type is `Send + Sync` and holds only
//! construction-time state, so independent merges can run concurrently.

pub mod conflict;
pub mod dedup;
pub mod merge;

pub use conflict::{detect_conflicts, resolve, ConflictResolver};
pub use dedup::{
    shingles, similarity, DuplicatePair, NearDuplicateEliminator, Signature, SignatureEngine,
};
pub use merge::{MergeDiagnostics, MergeOptions, MergeOrchestrator, MergeOutcome};
