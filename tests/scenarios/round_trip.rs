//! Round-trip indexing and query scenarios

use crate::test_utils::reference_index;
use lexis::{Language, Occurrence};

const DOC: &str = "The cat sat.\n\nThe cat ran fast.";

#[test]
fn test_round_trip_positions() {
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();

    let en = Language::english();
    let expected = [
        ("cat", 0, 0),
        ("sat", 0, 1),
        ("cat", 1, 0),
        ("ran", 1, 1),
        ("fast", 1, 2),
    ];
    for (token, paragraph, position) in expected {
        let occurrences = index.occurrences(token).unwrap();
        assert!(
            occurrences.contains(&Occurrence::new("doc1.txt", paragraph, position, en.clone())),
            "missing {} at {}:{}",
            token,
            paragraph,
            position
        );
    }
    assert!(index.occurrences("the").is_none());
}

#[test]
fn test_round_trip_term_search() {
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();

    let results = index.search_term("cat");
    assert_eq!(results.len(), 1);
    assert_eq!(results["cat"].len(), 2);
}

#[test]
fn test_round_trip_phrase_search() {
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();

    let matches = index.search_phrase("cat ran");
    assert_eq!(
        matches,
        vec![Occurrence::new("doc1.txt", 1, 0, Language::english())]
    );
}

#[test]
fn test_phrase_is_subset_of_first_term() {
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();
    index
        .index_document("doc2.txt", "A cat ran home.\n\nThe dog ran fast.")
        .unwrap();

    for phrase in ["cat ran", "ran fast", "cat sat", "dog ran fast"] {
        let first = phrase.split(' ').next().unwrap();
        let term_hits = index.search_term(first);
        for occ in index.search_phrase(phrase) {
            assert!(term_hits[first].contains(&occ), "{} not in term list", phrase);
        }
    }
}

#[test]
fn test_stop_word_in_query_is_ignored() {
    // Adjacency is over filtered tokens on both sides.
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();
    assert_eq!(index.search_phrase("the cat ran").len(), 1);
    assert_eq!(index.search_phrase("cat the ran").len(), 1);
}

#[test]
fn test_reindex_doubles_counts() {
    let index = reference_index();
    index.index_document("doc1.txt", DOC).unwrap();
    let before = index.word_distribution(None).count("cat");
    index.index_document("doc1.txt", DOC).unwrap();
    let after = index.word_distribution(None).count("cat");

    assert_eq!(before, 2);
    assert_eq!(after, 4);
    assert_eq!(index.search_phrase("cat ran").len(), 2);
}

#[test]
fn test_empty_index_queries() {
    let index = reference_index();
    assert!(index.search_term("anything at all").is_empty());
    assert!(index.search_phrase("anything at all").is_empty());
    assert!(index.search_phrase("").is_empty());
}
