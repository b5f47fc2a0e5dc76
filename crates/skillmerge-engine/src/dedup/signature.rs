//! MinHash signatures over word shingles.
//!
//! Each slot holds `min(base_hash(shingle) ^ seed_i)` over every shingle of a
//! text block. The fraction of equal slots between two signatures estimates
//! the Jaccard similarity of the underlying shingle sets.

use serde::{Deserialize, Serialize};

use skillmerge_core::config::DedupConfig;
use skillmerge_core::constants::{DEFAULT_NUM_HASHES, DEFAULT_SHINGLE_SIZE, SEED_BASE};
use skillmerge_core::errors::ConfigError;
use skillmerge_core::types::HashAlgorithm;

use super::shingle::shingles;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// A fixed-length MinHash fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(Vec<u64>);

impl Signature {
    /// Wrap raw slot values, e.g. a signature deserialized from elsewhere.
    pub fn from_values(values: Vec<u64>) -> Self {
        Self(values)
    }

    /// Number of slots (hash functions).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// True when no shingle was observed: every slot still holds the sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.0.iter().all(|&v| v == u64::MAX)
    }

    /// Estimated Jaccard similarity with `other`. See [`similarity`].
    pub fn similarity(&self, other: &Signature) -> f64 {
        similarity(self, other)
    }
}

/// Estimate Jaccard similarity from two signatures.
///
/// Signatures of different lengths are not comparable and score 0.0, as do
/// two zero-length signatures.
pub fn similarity(a: &Signature, b: &Signature) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let matching = a
        .0
        .iter()
        .zip(b.0.iter())
        .filter(|(x, y)| x == y)
        .count();
    matching as f64 / a.len() as f64
}

/// Computes MinHash signatures with a seed table fixed at construction.
///
/// Holds no per-call state; share one instance across threads freely.
#[derive(Debug, Clone)]
pub struct SignatureEngine {
    seeds: Box<[u64]>,
    shingle_size: usize,
    hash_algorithm: HashAlgorithm,
}

impl SignatureEngine {
    /// Create an engine with `num_hashes` slots per signature.
    pub fn new(
        num_hashes: usize,
        shingle_size: usize,
        hash_algorithm: HashAlgorithm,
    ) -> Result<Self, ConfigError> {
        if num_hashes == 0 {
            return Err(ConfigError::validation(
                "dedup.num_hashes",
                "must be greater than 0",
            ));
        }
        if shingle_size == 0 {
            return Err(ConfigError::validation(
                "dedup.shingle_size",
                "must be greater than 0",
            ));
        }
        Ok(Self {
            seeds: derive_seeds(num_hashes),
            shingle_size,
            hash_algorithm,
        })
    }

    /// Create an engine from validated dedup configuration.
    pub fn from_config(config: &DedupConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            config.effective_num_hashes(),
            config.effective_shingle_size(),
            config.effective_hash_algorithm(),
        )
    }

    /// Signature length produced by this engine.
    pub fn num_hashes(&self) -> usize {
        self.seeds.len()
    }

    pub fn shingle_size(&self) -> usize {
        self.shingle_size
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// The per-slot seeds. Pairwise distinct.
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Compute the MinHash signature of `text`.
    ///
    /// Text with fewer words than the shingle size yields an all-sentinel
    /// (`u64::MAX`) signature of full length.
    pub fn compute_signature(&self, text: &str) -> Signature {
        let mut slots = vec![u64::MAX; self.seeds.len()];
        for shingle in shingles(text, self.shingle_size) {
            let base = self.base_hash(&shingle);
            for (slot, &seed) in slots.iter_mut().zip(self.seeds.iter()) {
                let candidate = base ^ seed;
                if candidate < *slot {
                    *slot = candidate;
                }
            }
        }
        Signature(slots)
    }

    fn base_hash(&self, shingle: &str) -> u64 {
        match self.hash_algorithm {
            HashAlgorithm::Fnv1a => fnv1a_64(shingle.as_bytes()),
            HashAlgorithm::Xxh3 => xxhash_rust::xxh3::xxh3_64(shingle.as_bytes()),
        }
    }
}

impl Default for SignatureEngine {
    fn default() -> Self {
        Self {
            seeds: derive_seeds(DEFAULT_NUM_HASHES),
            shingle_size: DEFAULT_SHINGLE_SIZE,
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

/// FNV-1a 64-bit hash.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// SplitMix64 over consecutive counters. The finalizer is a bijection and the
/// counters are distinct, so the seeds are pairwise distinct.
fn derive_seeds(count: usize) -> Box<[u64]> {
    (0..count as u64)
        .map(|i| {
            let mut z = SEED_BASE.wrapping_add(i.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        })
        .collect()
}
