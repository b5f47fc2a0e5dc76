//! Near-duplicate detection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NUM_HASHES, DEFAULT_SHINGLE_SIZE, DEFAULT_SIMILARITY_THRESHOLD};
use crate::errors::ConfigError;
use crate::types::HashAlgorithm;

/// Configuration for MinHash signatures and near-duplicate elimination.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DedupConfig {
    /// Number of hash functions per signature. Default: 100.
    pub num_hashes: Option<usize>,
    /// Similarity at or above which two blocks are near-duplicates. Default: 0.8.
    pub threshold: Option<f64>,
    /// Words per shingle. Default: 3.
    pub shingle_size: Option<usize>,
    /// Base hash applied to shingles. Default: fnv1a.
    pub hash_algorithm: Option<HashAlgorithm>,
}

impl DedupConfig {
    /// Returns the effective number of hash functions, defaulting to 100.
    pub fn effective_num_hashes(&self) -> usize {
        self.num_hashes.unwrap_or(DEFAULT_NUM_HASHES)
    }

    /// Returns the effective similarity threshold, defaulting to 0.8.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_SIMILARITY_THRESHOLD)
    }

    /// Returns the effective shingle size, defaulting to 3.
    pub fn effective_shingle_size(&self) -> usize {
        self.shingle_size.unwrap_or(DEFAULT_SHINGLE_SIZE)
    }

    /// Returns the effective base hash, defaulting to FNV-1a.
    pub fn effective_hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::validation(
                    "dedup.threshold",
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        if self.num_hashes == Some(0) {
            return Err(ConfigError::validation(
                "dedup.num_hashes",
                "must be greater than 0",
            ));
        }
        if self.shingle_size == Some(0) {
            return Err(ConfigError::validation(
                "dedup.shingle_size",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Overlay `other` onto `self` field by field, where `other` is `Some`.
    pub(crate) fn merge_from(&mut self, other: &DedupConfig) {
        if other.num_hashes.is_some() {
            self.num_hashes = other.num_hashes;
        }
        if other.threshold.is_some() {
            self.threshold = other.threshold;
        }
        if other.shingle_size.is_some() {
            self.shingle_size = other.shingle_size;
        }
        if other.hash_algorithm.is_some() {
            self.hash_algorithm = other.hash_algorithm;
        }
    }
}
