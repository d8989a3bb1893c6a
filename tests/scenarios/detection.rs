//! Language detection scenarios

use crate::test_utils::{reference_detector, reference_index};
use lexis::{Error, Language, LanguageDetector, DEFAULT_DETECTION_THRESHOLD};

#[test]
fn test_detects_french_phrase() {
    let detector = reference_detector();
    let dist = detector.distribution_of("le chat mange", None);
    let result = detector.classify(&dist, DEFAULT_DETECTION_THRESHOLD).unwrap();

    assert!(result.score > DEFAULT_DETECTION_THRESHOLD);
    assert_eq!(result.language, Some(Language::french()));
    assert_eq!(
        detector.classify_language_only(&dist, DEFAULT_DETECTION_THRESHOLD).unwrap(),
        Some(Language::french())
    );
}

#[test]
fn test_numeric_text_abstains() {
    let detector = reference_detector();
    let dist = detector.distribution_of("2024 1999 42 3.14", None);
    let result = detector.classify(&dist, DEFAULT_DETECTION_THRESHOLD).unwrap();

    assert_eq!(result.language, None);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.scores.len(), 2);
}

#[test]
fn test_classify_requires_models() {
    let detector = LanguageDetector::new();
    let dist = detector.distribution_of("le chat", None);
    assert!(matches!(
        detector.classify(&dist, DEFAULT_DETECTION_THRESHOLD),
        Err(Error::Precondition(_))
    ));
}

#[test]
fn test_documents_tagged_with_detected_language() {
    let index = reference_index();
    let lang = index
        .index_document(
            "fr.txt",
            "Le chat mange la souris.\n\nLes enfants jouent dans le jardin.",
        )
        .unwrap();
    assert_eq!(lang, Language::french());

    let dist = index.word_distribution(Some(&Language::french()));
    assert_eq!(dist.count("chat"), 1);
    assert_eq!(dist.count("enfants"), 1);
    assert!(index.word_distribution(Some(&Language::english())).is_empty());
}
