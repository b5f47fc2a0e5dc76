//! Merge diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters describing one merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeDiagnostics {
    /// Documents handed to the merge.
    pub input_documents: usize,
    /// Sections across all input documents.
    pub input_sections: usize,
    /// Sections dropped by near-duplicate elimination.
    pub near_duplicates_removed: usize,
    /// Distinct case-insensitive titles after elimination.
    pub section_groups: usize,
    /// Groups with more than one member, reconciled into one section.
    pub reconciled_groups: usize,
    /// Sections in the merged document.
    pub output_sections: usize,
}

impl MergeDiagnostics {
    /// Fraction of input sections that did not survive as separate sections.
    pub fn reduction_ratio(&self) -> f64 {
        if self.input_sections == 0 {
            return 0.0;
        }
        1.0 - (self.output_sections as f64 / self.input_sections as f64)
    }
}

impl fmt::Display for MergeDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MergeDiagnostics {{ documents={}, sections={}->{}, near_duplicates={}, groups={}, reconciled={}, reduction={:.1}% }}",
            self.input_documents,
            self.input_sections,
            self.output_sections,
            self.near_duplicates_removed,
            self.section_groups,
            self.reconciled_groups,
            self.reduction_ratio() * 100.0,
        )
    }
}
