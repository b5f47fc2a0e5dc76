//! Per-call merge options.

use serde::{Deserialize, Serialize};

/// Caller overrides for a single merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Explicit merged name; ignored when blank.
    pub name: Option<String>,
    /// Explicit merged description; ignored when blank.
    pub description: Option<String>,
    /// Remove near-duplicate section content before grouping.
    pub deduplicate: bool,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// The explicit name, if one was given and is not blank.
    pub fn name_override(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// The explicit description, if one was given and is not blank.
    pub fn description_override(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
