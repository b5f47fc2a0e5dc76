//! Conflict resolution and detection.

pub mod detection;
pub mod resolution;

use skillmerge_core::types::{Conflict, Document, ResolutionStrategy};

pub use detection::detect_conflicts;
pub use resolution::resolve;

/// Reduces competing values with one configured strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictResolver {
    strategy: ResolutionStrategy,
}

impl ConflictResolver {
    pub fn new(strategy: ResolutionStrategy) -> Self {
        Self { strategy }
    }

    /// Resolve `values` using the configured strategy.
    pub fn resolve<S: AsRef<str>>(&self, values: &[S]) -> String {
        resolve(values, self.strategy)
    }

    /// Report disagreements across `documents`, resolved with the configured strategy.
    pub fn detect_conflicts(&self, documents: &[Document]) -> Vec<Conflict> {
        detect_conflicts(documents, self.strategy)
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: ResolutionStrategy) {
        self.strategy = strategy;
    }
}
