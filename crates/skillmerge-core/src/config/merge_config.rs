//! Merge orchestration configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_JOINED_NAMES, DEFAULT_MERGED_NAME};
use crate::errors::ConfigError;
use crate::types::ResolutionStrategy;

/// Configuration for merging N documents into one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    /// Name used when no source document has one. Default: "Merged Skill".
    pub default_name: Option<String>,
    /// Maximum source names joined into the merged name. Default: 3.
    pub max_joined_names: Option<usize>,
    /// Near-duplicate elimination when the caller does not say. Default: false.
    pub deduplicate: Option<bool>,
    /// Strategy for section groups with several members. Default: combine.
    pub section_strategy: Option<ResolutionStrategy>,
    /// Strategy for the merged version string. Default: keep_first.
    pub version_strategy: Option<ResolutionStrategy>,
    /// Strategy used to fill `Conflict::resolved` in reports. Default: keep_first.
    pub conflict_strategy: Option<ResolutionStrategy>,
}

impl MergeConfig {
    /// Returns the effective fallback name, defaulting to "Merged Skill".
    pub fn effective_default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_MERGED_NAME)
    }

    /// Returns the effective name limit, defaulting to 3.
    pub fn effective_max_joined_names(&self) -> usize {
        self.max_joined_names.unwrap_or(DEFAULT_MAX_JOINED_NAMES)
    }

    /// Returns whether merges deduplicate by default, defaulting to false.
    pub fn effective_deduplicate(&self) -> bool {
        self.deduplicate.unwrap_or(false)
    }

    /// Returns the effective section strategy, defaulting to `Combine`.
    pub fn effective_section_strategy(&self) -> ResolutionStrategy {
        self.section_strategy.unwrap_or(ResolutionStrategy::Combine)
    }

    /// Returns the effective version strategy, defaulting to `KeepFirst`.
    pub fn effective_version_strategy(&self) -> ResolutionStrategy {
        self.version_strategy.unwrap_or(ResolutionStrategy::KeepFirst)
    }

    /// Returns the effective conflict report strategy, defaulting to `KeepFirst`.
    pub fn effective_conflict_strategy(&self) -> ResolutionStrategy {
        self.conflict_strategy.unwrap_or(ResolutionStrategy::KeepFirst)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The overflow form keeps `max - 1` names plus the suffix.
        if let Some(max) = self.max_joined_names {
            if max < 2 {
                return Err(ConfigError::validation(
                    "merge.max_joined_names",
                    "must be at least 2",
                ));
            }
        }
        if let Some(ref name) = self.default_name {
            if name.trim().is_empty() {
                return Err(ConfigError::validation(
                    "merge.default_name",
                    "must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// Overlay `other` onto `self` field by field, where `other` is `Some`.
    pub(crate) fn merge_from(&mut self, other: &MergeConfig) {
        if other.default_name.is_some() {
            self.default_name = other.default_name.clone();
        }
        if other.max_joined_names.is_some() {
            self.max_joined_names = other.max_joined_names;
        }
        if other.deduplicate.is_some() {
            self.deduplicate = other.deduplicate;
        }
        if other.section_strategy.is_some() {
            self.section_strategy = other.section_strategy;
        }
        if other.version_strategy.is_some() {
            self.version_strategy = other.version_strategy;
        }
        if other.conflict_strategy.is_some() {
            self.conflict_strategy = other.conflict_strategy;
        }
    }
}
