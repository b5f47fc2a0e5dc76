//! Word n-gram shingling.

use skillmerge_core::types::FxHashSet;

/// All contiguous windows of `n` words in `text`, lower-cased and joined by a
/// single space.
///
/// Words are split on any whitespace, so runs of spaces, tabs, and newlines
/// collapse. Returns an empty set when `text` has fewer than `n` words or `n`
/// is zero.
pub fn shingles(text: &str, n: usize) -> FxHashSet<String> {
    if n == 0 {
        return FxHashSet::default();
    }
    let normalized = text.to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.len() < n {
        return FxHashSet::default();
    }
    words.windows(n).map(|window| window.join(" ")).collect()
}
