//! Language-aware text transformer
//!
//! Pipeline: lowercase → restrict to the profile alphabet → strip ASCII
//!           punctuation → extract maximal word runs → remove stop words
//!
//! The profile for a language decides both the alphabet and the stop-word
//! table. Languages without a registered profile use the English profile.

use super::stopwords::{ENGLISH_STOP_WORDS, FRENCH_STOP_WORDS};
use lexis_core::{Language, Token};
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

static ENGLISH_PROFILE: Lazy<LanguageProfile> =
    Lazy::new(|| LanguageProfile::new(Alphabet::Ascii, ENGLISH_STOP_WORDS.iter().copied()));

static FRENCH_PROFILE: Lazy<LanguageProfile> =
    Lazy::new(|| LanguageProfile::new(Alphabet::Latin1, FRENCH_STOP_WORDS.iter().copied()));

/// Characters a language's tokens may be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// ASCII letters and apostrophe. Every code point >= 127 is dropped
    /// before tokenizing.
    Ascii,
    /// ASCII letters, apostrophe and the Latin-1 range `U+00C0..=U+00FF`.
    /// Non-ASCII input is kept.
    Latin1,
}

impl Alphabet {
    /// Whether `c` survives the pre-tokenization restriction step.
    #[inline]
    fn admits(self, c: char) -> bool {
        match self {
            Alphabet::Ascii => (c as u32) < 127,
            Alphabet::Latin1 => true,
        }
    }

    /// Whether `c` can be part of a token.
    #[inline]
    fn is_word_char(self, c: char) -> bool {
        if c.is_ascii_alphabetic() || c == '\'' {
            return true;
        }
        match self {
            Alphabet::Ascii => false,
            Alphabet::Latin1 => ('\u{C0}'..='\u{FF}').contains(&c),
        }
    }
}

/// Tokenization rules for one language.
///
/// Cheap to clone: the stop-word table is shared.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    alphabet: Alphabet,
    stop_words: Arc<FxHashSet<String>>,
}

impl LanguageProfile {
    /// Create a profile from an alphabet and a stop-word list.
    ///
    /// Stop words are lowercased so they match normalized tokens.
    pub fn new<I, S>(alphabet: Alphabet, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        LanguageProfile {
            alphabet,
            stop_words: Arc::new(stop_words),
        }
    }

    /// Built-in English profile.
    pub fn english() -> Self {
        ENGLISH_PROFILE.clone()
    }

    /// Built-in French profile.
    pub fn french() -> Self {
        FRENCH_PROFILE.clone()
    }

    /// The profile's alphabet
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Check if a token is a stop word for this profile.
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of stop words in the profile
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// Remove every ASCII punctuation character from `text`.
///
/// Language-invariant. Non-ASCII punctuation (e.g. `«`, `’`) is left alone.
///
/// # Example
///
/// ```
/// use lexis_engine::analysis::strip_punctuation;
///
/// assert_eq!(strip_punctuation("Hello, World! (it's)"), "Hello World its");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Text → token normalization, parameterized by language.
///
/// Holds a registry of [`LanguageProfile`]s keyed by language code. English
/// and French are registered by default; unknown codes resolve to the
/// English profile.
#[derive(Debug, Clone)]
pub struct Transformer {
    profiles: FxHashMap<Language, LanguageProfile>,
    fallback: LanguageProfile,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer {
    /// Create a transformer with the built-in English and French profiles.
    pub fn new() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert(Language::english(), LanguageProfile::english());
        profiles.insert(Language::french(), LanguageProfile::french());
        Transformer {
            profiles,
            fallback: LanguageProfile::english(),
        }
    }

    /// Add or replace the profile for `language`.
    pub fn register(&mut self, language: Language, profile: LanguageProfile) {
        self.profiles.insert(language, profile);
    }

    /// Whether `language` has its own profile (rather than the fallback).
    pub fn is_supported(&self, language: &Language) -> bool {
        self.profiles.contains_key(language)
    }

    /// The profile used for `language`, falling back to English.
    pub fn profile_for(&self, language: &Language) -> &LanguageProfile {
        self.profiles.get(language).unwrap_or(&self.fallback)
    }

    /// Tokenize text into filtered, normalized tokens.
    ///
    /// Pipeline:
    /// 1. Lowercase
    /// 2. Drop characters outside the profile alphabet (ASCII profiles only)
    /// 3. Strip ASCII punctuation
    /// 4. Extract maximal runs of word characters
    /// 5. Remove stop words
    ///
    /// Output order matches input order; duplicates are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_core::Language;
    /// use lexis_engine::analysis::Transformer;
    ///
    /// let transformer = Transformer::new();
    /// let tokens = transformer.tokenize_and_filter("The cat sat.", &Language::english());
    /// assert_eq!(tokens, vec!["cat", "sat"]);
    /// ```
    pub fn tokenize_and_filter(&self, text: &str, language: &Language) -> Vec<Token> {
        let profile = self.profile_for(language);
        let alphabet = profile.alphabet;

        let lowered = text.to_lowercase();
        let restricted: String = lowered.chars().filter(|&c| alphabet.admits(c)).collect();
        let stripped = strip_punctuation(&restricted);

        let mut tokens = Vec::new();
        let mut current = String::new();
        for c in stripped.chars() {
            if alphabet.is_word_char(c) {
                current.push(c);
            } else if !current.is_empty() {
                if !profile.is_stop_word(&current) {
                    tokens.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
        if !current.is_empty() && !profile.is_stop_word(&current) {
            tokens.push(current);
        }
        tokens
    }
}
