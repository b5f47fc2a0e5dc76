//! Top-level skillmerge configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DedupConfig, MergeConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SKILLMERGE_*`)
/// 2. Config file (`skillmerge.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SkillMergeConfig {
    pub dedup: DedupConfig,
    pub merge: MergeConfig,
}

impl SkillMergeConfig {
    /// Load configuration with layered resolution.
    ///
    /// A `path` that does not exist is an error; pass `None` to use only
    /// environment variables and defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every sub-config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dedup.validate()?;
        self.merge.validate()?;
        Ok(())
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.dedup.merge_from(&file_config.dedup);
        config.merge.merge_from(&file_config.merge);
        Ok(())
    }

    /// Apply `SKILLMERGE_*` environment variable overrides.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut Self) {
        if let Some(v) = env_value("SKILLMERGE_DEDUP_NUM_HASHES") {
            config.dedup.num_hashes = Some(v);
        }
        if let Some(v) = env_value("SKILLMERGE_DEDUP_THRESHOLD") {
            config.dedup.threshold = Some(v);
        }
        if let Some(v) = env_value("SKILLMERGE_DEDUP_SHINGLE_SIZE") {
            config.dedup.shingle_size = Some(v);
        }
        if let Some(v) = env_value("SKILLMERGE_DEDUP_HASH_ALGORITHM") {
            config.dedup.hash_algorithm = Some(v);
        }
        if let Some(v) = env_value("SKILLMERGE_MERGE_DEDUPLICATE") {
            config.merge.deduplicate = Some(v);
        }
        if let Ok(val) = std::env::var("SKILLMERGE_MERGE_DEFAULT_NAME") {
            config.merge.default_name = Some(val);
        }
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HashAlgorithm, ResolutionStrategy};

    #[test]
    fn from_toml_reads_both_tables() {
        let config = SkillMergeConfig::from_toml(
            r#"
[dedup]
threshold = 0.9
hash_algorithm = "xxh3"

[merge]
section_strategy = "keep_longer"
"#,
        )
        .unwrap();
        assert_eq!(config.dedup.effective_threshold(), 0.9);
        assert_eq!(config.dedup.effective_hash_algorithm(), HashAlgorithm::Xxh3);
        assert_eq!(config.dedup.effective_num_hashes(), 100);
        assert_eq!(
            config.merge.effective_section_strategy(),
            ResolutionStrategy::KeepLonger
        );
    }

    #[test]
    fn from_toml_ignores_unknown_keys() {
        let config = SkillMergeConfig::from_toml("[dedup]\nbands = 20\n").unwrap();
        assert_eq!(config, SkillMergeConfig::default());
    }

    #[test]
    fn from_toml_validates() {
        let result = SkillMergeConfig::from_toml("[dedup]\nshingle_size = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn to_toml_round_trips() {
        let mut config = SkillMergeConfig::default();
        config.dedup.num_hashes = Some(64);
        config.merge.deduplicate = Some(true);
        let text = config.to_toml().unwrap();
        assert_eq!(SkillMergeConfig::from_toml(&text).unwrap(), config);
    }
}
