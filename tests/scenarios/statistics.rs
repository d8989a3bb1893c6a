//! Distribution and top-terms scenarios

use crate::test_utils::reference_index;
use lexis::Language;

#[test]
fn test_top_terms_stable() {
    let index = reference_index();
    index
        .index_corpus([
            ("a.txt", "The cat sat.\n\nThe cat ran fast."),
            ("b.txt", "The dog ran.\n\nA bird sang."),
        ])
        .unwrap();

    let first = index.top_terms(3, None);
    let second = index.top_terms(3, None);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            ("cat".to_string(), 2),
            ("ran".to_string(), 2),
            ("sat".to_string(), 1),
        ]
    );
}

#[test]
fn test_stats_after_corpus() {
    let index = reference_index();
    let indexed = index
        .index_corpus([("a.txt", "cat sat"), ("b.txt", "cat ran")])
        .unwrap();
    assert_eq!(indexed, 2);

    let stats = index.stats();
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.unique_terms, 3);
    assert_eq!(stats.total_occurrences, 4);
}

#[test]
fn test_explicit_language_tagging() {
    let index = reference_index();
    index.index_document_as("notes.txt", "chat chat chien", Language::french());

    let top = index.top_terms(1, Some(&Language::french()));
    assert_eq!(top, vec![("chat".to_string(), 2)]);
    assert!(index.top_terms(1, Some(&Language::english())).is_empty());
}

#[test]
fn test_analyze_document_matches_indexed_counts() {
    let index = reference_index();
    let text = "The cat sat.\n\nThe cat ran fast.";
    let analyzed = index.analyze_document(text, &Language::english());
    index.index_document_as("doc", text, Language::english());
    assert_eq!(analyzed, index.word_distribution(None));
}
