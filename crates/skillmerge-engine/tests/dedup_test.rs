//! Integration tests for shingling, signatures, and near-duplicate elimination.

use skillmerge_core::config::{DedupConfig, SkillMergeConfig};
use skillmerge_core::types::{HashAlgorithm, Section};
use skillmerge_engine::{shingles, similarity, NearDuplicateEliminator, SignatureEngine};

#[test]
fn shingle_examples() {
    let five = shingles("one two three four five", 3);
    assert_eq!(five.len(), 3);
    for expected in ["one two three", "two three four", "three four five"] {
        assert!(five.contains(expected), "missing shingle {expected:?}");
    }
    assert!(shingles("one two", 3).is_empty());
}

#[test]
fn every_signature_has_full_length() {
    let engine = SignatureEngine::default();
    for text in ["", "one", "one two", "one two three", "a much longer block of prose text"] {
        assert_eq!(engine.compute_signature(text).len(), 100, "text {text:?}");
    }
}

#[test]
fn signatures_are_deterministic() {
    let engine = SignatureEngine::default();
    let text = "Paginate with the cursor returned in the Link header of each response";
    assert_eq!(engine.compute_signature(text), engine.compute_signature(text));
}

#[test]
fn both_hash_algorithms_detect_identical_text() {
    for algo in [HashAlgorithm::Fnv1a, HashAlgorithm::Xxh3] {
        let engine = SignatureEngine::new(100, 3, algo).unwrap();
        let a = engine.compute_signature("webhooks retry with exponential backoff up to five times");
        let b = engine.compute_signature("Webhooks retry with exponential backoff up to five times");
        assert_eq!(similarity(&a, &b), 1.0, "algorithm {algo}");
    }
}

#[test]
fn hash_algorithms_produce_different_fingerprints() {
    let text = "webhooks retry with exponential backoff";
    let fnv = SignatureEngine::new(16, 3, HashAlgorithm::Fnv1a).unwrap();
    let xxh = SignatureEngine::new(16, 3, HashAlgorithm::Xxh3).unwrap();
    assert_ne!(fnv.compute_signature(text), xxh.compute_signature(text));
}

#[test]
fn signatures_from_different_engines_are_not_comparable() {
    let small = SignatureEngine::new(50, 3, HashAlgorithm::Fnv1a).unwrap();
    let large = SignatureEngine::default();
    let text = "identical text in both engines here";
    assert_eq!(
        similarity(&small.compute_signature(text), &large.compute_signature(text)),
        0.0
    );
}

#[test]
fn identical_strings_deduplicate_to_one() {
    let result = NearDuplicateEliminator::default().deduplicate_strings(vec![
        "This is a test string with content.".to_string(),
        "This is a test string with content.".to_string(),
    ]);
    assert_eq!(result.len(), 1);
}

#[test]
fn survivors_keep_their_relative_order() {
    let items: Vec<String> = vec![
        "zebra crossings are marked with white stripes on the road".into(),
        "apples grow on trees in temperate orchards every autumn".into(),
        "Zebra crossings are marked with white stripes on the road".into(),
        "mountains rise above the valley floor covered in snow".into(),
        "apples grow on trees in temperate orchards every autumn".into(),
        "rivers carve canyons through soft sandstone over millennia".into(),
    ];
    let result = NearDuplicateEliminator::default().deduplicate_strings(items.clone());
    assert_eq!(
        result,
        vec![
            items[0].clone(),
            items[1].clone(),
            items[3].clone(),
            items[5].clone()
        ]
    );
}

#[test]
fn short_sections_count_as_duplicates_of_each_other() {
    // Fewer than three words leaves an all-sentinel signature on both sides.
    let sections = vec![
        Section::new("Status", 2, "TBD"),
        Section::new("Notes", 2, "See above"),
    ];
    let result = NearDuplicateEliminator::default().deduplicate_sections(sections);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Notes");
}

#[test]
fn lower_threshold_from_config_catches_looser_matches() {
    let base: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
    let mut edited = base.clone();
    edited[29] = "changed".to_string();
    let items = vec![base.join(" "), edited.join(" ")];

    let strict = SkillMergeConfig::from_toml("[dedup]\nthreshold = 1.0\n").unwrap();
    let loose = DedupConfig {
        threshold: Some(0.5),
        ..Default::default()
    };

    let strict = NearDuplicateEliminator::from_config(&strict.dedup).unwrap();
    let loose = NearDuplicateEliminator::from_config(&loose).unwrap();

    // One trailing word differs: 27 of 29 trigrams are shared.
    assert_eq!(loose.deduplicate_strings(items.clone()).len(), 1);

    assert_eq!(strict.threshold(), 1.0);
    let identical = vec![items[0].clone(), items[0].clone()];
    assert_eq!(strict.deduplicate_strings(identical).len(), 1);
}
