//! Conflict resolution strategies.

use skillmerge_core::constants::CONTENT_SEPARATOR;
use skillmerge_core::types::{FxHashSet, ResolutionStrategy};

/// Reduce candidate values to one using `strategy`.
///
/// Empty and whitespace-only candidates are dropped first. No candidates
/// left resolves to an empty string; exactly one is returned as-is whatever
/// the strategy.
pub fn resolve<S: AsRef<str>>(values: &[S], strategy: ResolutionStrategy) -> String {
    let candidates: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| !v.trim().is_empty())
        .collect();

    match candidates.as_slice() {
        [] => return String::new(),
        [only] => return (*only).to_string(),
        _ => {}
    }

    match strategy {
        ResolutionStrategy::KeepFirst => candidates[0].to_string(),
        ResolutionStrategy::KeepLast => candidates[candidates.len() - 1].to_string(),
        ResolutionStrategy::KeepLonger => {
            let mut best = candidates[0];
            for &candidate in &candidates[1..] {
                if candidate.len() > best.len() {
                    best = candidate;
                }
            }
            best.to_string()
        }
        ResolutionStrategy::Combine => {
            let mut seen = FxHashSet::default();
            candidates
                .into_iter()
                .filter(|v| seen.insert(*v))
                .collect::<Vec<_>>()
                .join(CONTENT_SEPARATOR)
        }
    }
}
