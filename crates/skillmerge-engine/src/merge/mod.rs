//! N-to-1 document merging.

pub mod diagnostics;
pub mod grouping;
pub mod naming;
pub mod options;
pub mod orchestrator;

pub use diagnostics::MergeDiagnostics;
pub use options::MergeOptions;
pub use orchestrator::{MergeOrchestrator, MergeOutcome};
