//! Text analysis, language detection and positional search for Lexis
//!
//! This crate provides:
//! - `analysis`: the language-aware Transformer and stop-word tables
//! - `detect`: word distributions, cosine similarity and LanguageDetector
//! - `search`: PositionalIndex with single-term and phrase search
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lexis_core::Language;
//! use lexis_engine::detect::LanguageDetector;
//! use lexis_engine::search::PositionalIndex;
//!
//! let detector = LanguageDetector::new();
//! detector.build_model_from_text("the cat sat on the mat", Language::english())?;
//!
//! let index = PositionalIndex::new(Arc::new(detector));
//! index.index_document("doc1.txt", "The cat sat.\n\nThe cat ran fast.")?;
//!
//! assert_eq!(index.search_term("cat")["cat"].len(), 2);
//! assert_eq!(index.search_phrase("cat ran").len(), 1);
//! # Ok::<(), lexis_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod detect;
pub mod search;

pub use analysis::{LanguageProfile, Transformer};
pub use detect::{Classification, CorpusSource, FileCorpus, LanguageDetector, TextCorpus, WordDistribution};
pub use search::{IndexStats, Occurrence, PositionalIndex};
