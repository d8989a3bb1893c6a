//! Shared fixtures for scenario tests

use lexis::{Language, LanguageDetector, PositionalIndex};
use std::sync::Arc;

pub const ENGLISH_REFERENCE: &str = "The cat sat on the mat while the dog slept by the fire. \
    Every morning the farmer walked to the market and sold fresh bread. \
    The children played in the garden and the cat chased a bird.";

pub const FRENCH_REFERENCE: &str = "Le chat mange la souris dans la cuisine. \
    Chaque matin le fermier marche au marché et vend du pain frais. \
    Les enfants jouent dans le jardin et le chat mange encore.";

/// Detector with English and French reference models.
pub fn reference_detector() -> Arc<LanguageDetector> {
    let detector = LanguageDetector::new();
    detector
        .build_model_from_text(ENGLISH_REFERENCE, Language::english())
        .expect("english model");
    detector
        .build_model_from_text(FRENCH_REFERENCE, Language::french())
        .expect("french model");
    Arc::new(detector)
}

/// Fresh index over the reference detector.
pub fn reference_index() -> PositionalIndex {
    PositionalIndex::new(reference_detector())
}
