//! # Lexis
//!
//! Language-aware positional text index.
//!
//! Lexis indexes plain-text documents paragraph by paragraph, detects each
//! document's language from its word distribution, and answers single-term
//! and exact-phrase queries.
//!
//! ```
//! use lexis::{Language, LanguageDetector, PositionalIndex};
//! use std::sync::Arc;
//!
//! let detector = LanguageDetector::new();
//! detector.build_model_from_text("the cat sat on the mat", Language::english())?;
//! detector.build_model_from_text("le chat est sur le tapis", Language::french())?;
//!
//! let index = PositionalIndex::new(Arc::new(detector));
//! index.index_corpus([("doc1.txt", "The cat sat.\n\nThe cat ran fast.")])?;
//!
//! let hits = index.search_phrase("cat ran");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].paragraph_index, 1);
//! # Ok::<(), lexis::Error>(())
//! ```

pub use lexis_core::{Error, Language, LexisConfig, Result, Token, DEFAULT_DETECTION_THRESHOLD};
pub use lexis_engine::analysis::{self, Alphabet, LanguageProfile, Transformer};
pub use lexis_engine::detect::{
    self, similarity, Classification, CorpusSource, FileCorpus, LanguageDetector, TextCorpus,
    WordDistribution,
};
pub use lexis_engine::search::{self, IndexStats, Occurrence, PositionalIndex};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
