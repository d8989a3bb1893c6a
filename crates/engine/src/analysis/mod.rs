//! Text analysis
//!
//! This module contains:
//! - `transformer`: language-aware tokenization (Transformer, LanguageProfile)
//! - `stopwords`: built-in English and French stop-word tables
//! - `chars`: character statistics helpers

pub mod chars;
pub mod stopwords;
mod transformer;

pub use chars::{char_frequencies, count_chars, list_words, replace_counted_chars};
pub use transformer::{strip_punctuation, Alphabet, LanguageProfile, Transformer};
