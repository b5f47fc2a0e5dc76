//! MergeOrchestrator: N documents in, one document out.

use std::collections::BTreeSet;

use chrono::Utc;
use tracing::{debug, info};

use skillmerge_core::config::{MergeConfig, SkillMergeConfig};
use skillmerge_core::constants::{DEFAULT_MAX_JOINED_NAMES, DEFAULT_MERGED_NAME};
use skillmerge_core::errors::ConfigError;
use skillmerge_core::types::{Conflict, Document, ResolutionStrategy, Section};

use super::diagnostics::MergeDiagnostics;
use super::grouping::group_sections;
use super::naming::{merged_description, merged_name};
use super::options::MergeOptions;
use crate::conflict::{resolve, ConflictResolver};
use crate::dedup::NearDuplicateEliminator;

/// A merged document with the conflicts and counters gathered on the way.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub document: Document,
    /// Disagreements across the inputs; never blocks the merge.
    pub conflicts: Vec<Conflict>,
    pub diagnostics: MergeDiagnostics,
}

/// Merges documents: metadata reconciliation, optional near-duplicate
/// elimination, and case-insensitive section grouping.
///
/// Immutable after construction; one instance can serve concurrent merges.
#[derive(Debug, Clone)]
pub struct MergeOrchestrator {
    eliminator: NearDuplicateEliminator,
    conflict_resolver: ConflictResolver,
    default_name: String,
    max_joined_names: usize,
    deduplicate_by_default: bool,
    section_strategy: ResolutionStrategy,
    version_strategy: ResolutionStrategy,
}

impl MergeOrchestrator {
    pub fn new(
        eliminator: NearDuplicateEliminator,
        config: &MergeConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            eliminator,
            conflict_resolver: ConflictResolver::new(config.effective_conflict_strategy()),
            default_name: config.effective_default_name().to_string(),
            max_joined_names: config.effective_max_joined_names(),
            deduplicate_by_default: config.effective_deduplicate(),
            section_strategy: config.effective_section_strategy(),
            version_strategy: config.effective_version_strategy(),
        })
    }

    pub fn from_config(config: &SkillMergeConfig) -> Result<Self, ConfigError> {
        Self::new(NearDuplicateEliminator::from_config(&config.dedup)?, &config.merge)
    }

    pub fn eliminator(&self) -> &NearDuplicateEliminator {
        &self.eliminator
    }

    /// Options seeded from configuration: deduplication per `merge.deduplicate`,
    /// no name or description override.
    pub fn default_options(&self) -> MergeOptions {
        MergeOptions::new().with_deduplicate(self.deduplicate_by_default)
    }

    /// Merge `documents` into one.
    ///
    /// Returns `None` for no input. A single document is handed back
    /// unchanged (moved, not copied).
    pub fn merge(&self, documents: Vec<Document>, options: &MergeOptions) -> Option<Document> {
        self.run(documents, options, false).map(|outcome| outcome.document)
    }

    /// Merge `documents` and report conflicts and diagnostics alongside.
    pub fn merge_with_report(
        &self,
        documents: Vec<Document>,
        options: &MergeOptions,
    ) -> Option<MergeOutcome> {
        self.run(documents, options, true)
    }

    /// Report disagreements across `documents` without merging.
    pub fn detect_conflicts(&self, documents: &[Document]) -> Vec<Conflict> {
        self.conflict_resolver.detect_conflicts(documents)
    }

    fn run(
        &self,
        mut documents: Vec<Document>,
        options: &MergeOptions,
        with_conflicts: bool,
    ) -> Option<MergeOutcome> {
        if documents.len() <= 1 {
            let document = documents.pop()?;
            debug!(name = %document.name, "single document, returned as-is");
            let sections = document.sections.len();
            return Some(MergeOutcome {
                document,
                conflicts: Vec::new(),
                diagnostics: MergeDiagnostics {
                    input_documents: 1,
                    input_sections: sections,
                    near_duplicates_removed: 0,
                    section_groups: sections,
                    reconciled_groups: 0,
                    output_sections: sections,
                },
            });
        }

        let conflicts = if with_conflicts {
            self.conflict_resolver.detect_conflicts(&documents)
        } else {
            Vec::new()
        };

        let name = match options.name_override() {
            Some(name) => name.to_string(),
            None => merged_name(&documents, self.max_joined_names, &self.default_name),
        };
        let description = match options.description_override() {
            Some(description) => description.to_string(),
            None => merged_description(&documents),
        };
        let versions: Vec<&str> = documents.iter().map(|d| d.version.as_str()).collect();
        let version = resolve(&versions, self.version_strategy);

        let input_documents = documents.len();
        let mut tags = BTreeSet::new();
        let mut sections: Vec<Section> = Vec::new();
        for document in documents {
            tags.extend(document.tags);
            sections.extend(document.sections);
        }
        let input_sections = sections.len();

        if options.deduplicate {
            sections = self.eliminator.deduplicate_sections(sections);
        }
        let near_duplicates_removed = input_sections - sections.len();

        let grouped = group_sections(sections, self.section_strategy);

        let diagnostics = MergeDiagnostics {
            input_documents,
            input_sections,
            near_duplicates_removed,
            section_groups: grouped.sections.len(),
            reconciled_groups: grouped.reconciled_groups,
            output_sections: grouped.sections.len(),
        };
        info!(
            name = %name,
            conflicts = conflicts.len(),
            deduplicate = options.deduplicate,
            diagnostics = %diagnostics,
            "merge complete"
        );

        Some(MergeOutcome {
            document: Document {
                name,
                version,
                description,
                tags,
                sections: grouped.sections,
                generated_at: Some(Utc::now()),
            },
            conflicts,
            diagnostics,
        })
    }
}

impl Default for MergeOrchestrator {
    fn default() -> Self {
        Self {
            eliminator: NearDuplicateEliminator::default(),
            conflict_resolver: ConflictResolver::default(),
            default_name: DEFAULT_MERGED_NAME.to_string(),
            max_joined_names: DEFAULT_MAX_JOINED_NAMES,
            deduplicate_by_default: false,
            section_strategy: ResolutionStrategy::Combine,
            version_strategy: ResolutionStrategy::KeepFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn orchestrator_is_shareable_across_threads() {
        assert_send_sync::<MergeOrchestrator>();
    }

    #[test]
    fn empty_input_yields_none() {
        let orchestrator = MergeOrchestrator::default();
        assert!(orchestrator.merge(Vec::new(), &MergeOptions::new()).is_none());
        assert!(orchestrator
            .merge_with_report(Vec::new(), &MergeOptions::new())
            .is_none());
    }

    #[test]
    fn single_document_is_returned_unchanged() {
        let doc = Document::new("Solo")
            .with_version("3")
            .with_tag("x")
            .with_section(Section::new("A", 1, "a"));
        let merged = MergeOrchestrator::default()
            .merge(vec![doc.clone()], &MergeOptions::new().with_name("ignored"))
            .unwrap();
        assert_eq!(merged, doc);
        assert!(merged.generated_at.is_none());
    }

    #[test]
    fn default_options_follow_config() {
        let config = SkillMergeConfig::from_toml("[merge]\ndeduplicate = true\n").unwrap();
        let orchestrator = MergeOrchestrator::from_config(&config).unwrap();
        assert!(orchestrator.default_options().deduplicate);
        assert!(!MergeOrchestrator::default().default_options().deduplicate);
    }

    #[test]
    fn from_config_rejects_invalid_merge_config() {
        let config = SkillMergeConfig {
            merge: MergeConfig {
                max_joined_names: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(MergeOrchestrator::from_config(&config).is_err());
    }

    #[test]
    fn merged_document_is_stamped() {
        let merged = MergeOrchestrator::default()
            .merge(vec![Document::new("A"), Document::new("B")], &MergeOptions::new())
            .unwrap();
        assert!(merged.generated_at.is_some());
    }

    #[test]
    fn version_uses_configured_strategy() {
        let docs = || {
            vec![
                Document::new("A").with_version(""),
                Document::new("B").with_version("1.2"),
                Document::new("C").with_version("2.0"),
            ]
        };
        let first = MergeOrchestrator::default()
            .merge(docs(), &MergeOptions::new())
            .unwrap();
        assert_eq!(first.version, "1.2");

        let config =
            SkillMergeConfig::from_toml("[merge]\nversion_strategy = \"keep_last\"\n").unwrap();
        let last = MergeOrchestrator::from_config(&config)
            .unwrap()
            .merge(docs(), &MergeOptions::new())
            .unwrap();
        assert_eq!(last.version, "2.0");
    }
}
