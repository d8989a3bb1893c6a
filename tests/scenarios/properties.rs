//! Property scenarios over arbitrary small documents

use lexis::{Language, LanguageDetector, PositionalIndex};
use proptest::prelude::*;
use std::sync::Arc;

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(
            prop::sample::select(vec!["cat", "dog", "sat", "ran", "the", "a", "fast", "Mat."]),
            0..10,
        ),
        1..5,
    )
    .prop_map(|paragraphs| {
        paragraphs
            .iter()
            .map(|p| p.join(" "))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

proptest! {
    #[test]
    fn prop_top_terms_account_for_every_occurrence(text in document()) {
        let index = PositionalIndex::new(Arc::new(LanguageDetector::new()));
        index.index_document_as("doc", &text, Language::english());

        let stats = index.stats();
        let top = index.top_terms(stats.unique_terms, None);
        prop_assert_eq!(top.len(), stats.unique_terms);
        prop_assert_eq!(top.iter().map(|(_, n)| n).sum::<usize>(), stats.total_occurrences);
        prop_assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn prop_phrase_hits_are_followed_by_rest_of_phrase(text in document()) {
        let index = PositionalIndex::new(Arc::new(LanguageDetector::new()));
        index.index_document_as("doc", &text, Language::english());

        let following = index.occurrences("ran").unwrap_or_default();
        for hit in index.search_phrase("cat ran") {
            prop_assert!(following.contains(&hit.shifted(1)));
        }
    }
}
