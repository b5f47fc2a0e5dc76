//! Merged name and description.

use skillmerge_core::constants::{DESCRIPTION_SEPARATOR, NAME_OVERFLOW_SUFFIX, NAME_SEPARATOR};
use skillmerge_core::types::Document;

/// Join source names into a merged name.
///
/// Up to `max_names` non-blank names are joined with `" + "`. With more than
/// that, the first `max_names - 1` are kept and `" + more"` is appended. With
/// none, `fallback` is used.
pub fn merged_name(documents: &[Document], max_names: usize, fallback: &str) -> String {
    let names: Vec<&str> = documents
        .iter()
        .map(|d| d.name.as_str())
        .filter(|n| !n.trim().is_empty())
        .collect();

    if names.is_empty() {
        return fallback.to_string();
    }
    if names.len() > max_names {
        let keep = max_names.saturating_sub(1).max(1);
        let mut parts = names[..keep].to_vec();
        parts.push(NAME_OVERFLOW_SUFFIX);
        return parts.join(NAME_SEPARATOR);
    }
    names.join(NAME_SEPARATOR)
}

/// Space-join every non-blank source description in input order.
pub fn merged_description(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|d| d.description.as_str())
        .filter(|d| !d.trim().is_empty())
        .collect::<Vec<_>>()
        .join(DESCRIPTION_SEPARATOR)
}
