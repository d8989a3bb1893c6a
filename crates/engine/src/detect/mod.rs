//! Language detection
//!
//! This module contains:
//! - `distribution`: word-frequency distributions
//! - `similarity`: cosine similarity between distributions
//! - `corpus`: reference corpus sources (in-memory, file, directory)
//! - `detector`: LanguageDetector (model building and classification)

mod corpus;
mod detector;
mod distribution;
mod similarity;

pub use corpus::{CorpusSource, FileCorpus, TextCorpus};
pub use detector::{Classification, LanguageDetector};
pub use distribution::WordDistribution;
pub use similarity::similarity;
