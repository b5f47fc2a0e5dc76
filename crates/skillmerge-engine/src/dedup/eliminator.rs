//! Pairwise near-duplicate elimination.
//!
//! O(n²) signature comparisons. Merges handle tens to low hundreds of
//! sections, where this stays well under a millisecond per hundred blocks;
//! LSH banding would be the next step if inputs grow past that.

use tracing::debug;

use skillmerge_core::config::DedupConfig;
use skillmerge_core::constants::DEFAULT_SIMILARITY_THRESHOLD;
use skillmerge_core::errors::ConfigError;
use skillmerge_core::types::Section;

use super::signature::{similarity, Signature, SignatureEngine};

/// A near-duplicate pair acted on during elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair {
    /// Index of the surviving item.
    pub kept: usize,
    /// Index of the removed item.
    pub removed: usize,
    pub similarity: f64,
}

/// Removes near-duplicate text blocks, keeping the longer of each pair.
#[derive(Debug, Clone)]
pub struct NearDuplicateEliminator {
    engine: SignatureEngine,
    threshold: f64,
}

impl NearDuplicateEliminator {
    pub fn new(engine: SignatureEngine, threshold: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::validation(
                "dedup.threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        Ok(Self { engine, threshold })
    }

    pub fn from_config(config: &DedupConfig) -> Result<Self, ConfigError> {
        Self::new(
            SignatureEngine::from_config(config)?,
            config.effective_threshold(),
        )
    }

    pub fn engine(&self) -> &SignatureEngine {
        &self.engine
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the pairs elimination would act on, in the order it acts on them.
    ///
    /// For each pair `(i, j)`, `i < j`, of still-live items whose similarity
    /// meets the threshold, the longer text survives; the earlier one on a
    /// tie. Once `i` is removed it is compared no further.
    pub fn find_near_duplicates<S: AsRef<str>>(&self, texts: &[S]) -> Vec<DuplicatePair> {
        self.scan(texts).1
    }

    /// Remove near-duplicate sections by content, preserving the order of survivors.
    pub fn deduplicate_sections(&self, sections: Vec<Section>) -> Vec<Section> {
        if sections.len() <= 1 {
            return sections;
        }
        let contents: Vec<&str> = sections.iter().map(|s| s.content.as_str()).collect();
        let (removed, _) = self.scan(&contents);
        retain_unmarked(sections, &removed)
    }

    /// Remove near-duplicate strings, preserving the order of survivors.
    pub fn deduplicate_strings(&self, items: Vec<String>) -> Vec<String> {
        if items.len() <= 1 {
            return items;
        }
        let (removed, _) = self.scan(&items);
        retain_unmarked(items, &removed)
    }

    fn scan<S: AsRef<str>>(&self, texts: &[S]) -> (Vec<bool>, Vec<DuplicatePair>) {
        let n = texts.len();
        let mut removed = vec![false; n];
        let mut pairs = Vec::new();
        if n <= 1 {
            return (removed, pairs);
        }

        let signatures: Vec<Signature> = texts
            .iter()
            .map(|t| self.engine.compute_signature(t.as_ref()))
            .collect();

        for i in 0..n {
            if removed[i] {
                continue;
            }
            for j in (i + 1)..n {
                if removed[j] {
                    continue;
                }
                let sim = similarity(&signatures[i], &signatures[j]);
                if sim < self.threshold {
                    continue;
                }
                let (kept, loser) = if texts[j].as_ref().len() > texts[i].as_ref().len() {
                    (j, i)
                } else {
                    (i, j)
                };
                debug!(kept, removed = loser, similarity = sim, "near-duplicate");
                removed[loser] = true;
                pairs.push(DuplicatePair {
                    kept,
                    removed: loser,
                    similarity: sim,
                });
                if loser == i {
                    break;
                }
            }
        }

        (removed, pairs)
    }
}

impl Default for NearDuplicateEliminator {
    fn default() -> Self {
        Self {
            engine: SignatureEngine::default(),
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

fn retain_unmarked<T>(items: Vec<T>, removed: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(removed.iter())
        .filter(|(_, gone)| !**gone)
        .map(|(item, _)| item)
        .collect()
}
