//! Conflict detection: reports where input documents disagree.
//!
//! Read-only and informational. A field conflicts when more than one distinct
//! non-empty value exists for it across the inputs; empty values never
//! conflict with anything.

use skillmerge_core::types::{Conflict, Document, FxHashMap, ResolutionStrategy};

use super::resolution::resolve;

/// Detect disagreements on `name`, `version`, and each section title
/// (case-insensitive) across `documents`.
///
/// Section conflicts are reported under `section:<title>` with the casing of
/// the first section seen, in first-seen title order, after the `name` and
/// `version` conflicts.
pub fn detect_conflicts(documents: &[Document], strategy: ResolutionStrategy) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let names = distinct_non_empty(documents.iter().map(|d| d.name.as_str()));
    push_if_conflicting(&mut conflicts, "name".to_string(), names, strategy);

    let versions = distinct_non_empty(documents.iter().map(|d| d.version.as_str()));
    push_if_conflicting(&mut conflicts, "version".to_string(), versions, strategy);

    // (first-seen title, contents) per lower-cased title, in first-seen order.
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for section in documents.iter().flat_map(|d| d.sections.iter()) {
        let slot = *index.entry(section.title_key()).or_insert_with(|| {
            groups.push((section.title.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(section.content.as_str());
    }

    for (title, contents) in groups {
        let values = distinct_non_empty(contents.into_iter());
        push_if_conflicting(&mut conflicts, format!("section:{title}"), values, strategy);
    }

    conflicts
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if value.trim().is_empty() || distinct.iter().any(|d| d == value) {
            continue;
        }
        distinct.push(value.to_string());
    }
    distinct
}

fn push_if_conflicting(
    conflicts: &mut Vec<Conflict>,
    field: String,
    values: Vec<String>,
    strategy: ResolutionStrategy,
) {
    if values.len() > 1 {
        let resolved = resolve(&values, strategy);
        conflicts.push(Conflict {
            field,
            values,
            resolved,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmerge_core::types::Section;

    #[test]
    fn identical_documents_have_no_conflicts() {
        let doc = Document::new("User API")
            .with_version("1.0")
            .with_section(Section::new("Auth", 2, "Bearer"));
        let conflicts = detect_conflicts(&[doc.clone(), doc], ResolutionStrategy::KeepFirst);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn reports_name_and_version_disagreements() {
        let docs = [
            Document::new("User API").with_version("1.0"),
            Document::new("Product API").with_version("1.0"),
            Document::new("").with_version("2.0"),
        ];
        let conflicts = detect_conflicts(&docs, ResolutionStrategy::KeepLast);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].field, "name");
        assert_eq!(conflicts[0].values, vec!["User API", "Product API"]);
        assert_eq!(conflicts[0].resolved, "Product API");
        assert_eq!(conflicts[1].field, "version");
        assert_eq!(conflicts[1].resolved, "2.0");
    }

    #[test]
    fn section_titles_compare_case_insensitively() {
        let docs = [
            Document::new("a").with_section(Section::new("Overview", 1, "first")),
            Document::new("a").with_section(Section::new("OVERVIEW", 1, "second")),
            Document::new("a").with_section(Section::new("Errors", 2, "same")),
            Document::new("a").with_section(Section::new("errors", 2, "same")),
        ];
        let conflicts = detect_conflicts(&docs, ResolutionStrategy::Combine);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].field, "section:Overview");
        assert_eq!(conflicts[0].resolved, "first\n\nsecond");
    }

    #[test]
    fn empty_values_do_not_conflict() {
        let docs = [
            Document::new("Only").with_section(Section::new("Notes", 2, "")),
            Document::new("").with_section(Section::new("notes", 2, "filled")),
        ];
        assert!(detect_conflicts(&docs, ResolutionStrategy::KeepFirst).is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let docs = vec![Document::new("A"), Document::new("B")];
        let before = docs.clone();
        let _ = detect_conflicts(&docs, ResolutionStrategy::KeepFirst);
        assert_eq!(docs, before);
    }
}
