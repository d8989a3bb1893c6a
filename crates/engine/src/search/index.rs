//! Positional inverted index
//!
//! This module provides:
//! - PositionalIndex with per-token occurrence lists
//! - Paragraph-by-paragraph indexing with per-document language detection
//! - Single-term and exact-phrase search
//! - Corpus statistics (word distribution, top terms)
//!
//! # Positions
//!
//! Documents are split into paragraphs on the configured delimiter (two
//! consecutive line breaks by default). Each paragraph is tokenized under
//! the document's language and every surviving token is recorded at its
//! position in the filtered sequence. Phrase adjacency is therefore defined
//! over filtered tokens: stop words neither occupy nor break positions.
//!
//! # Ordering
//!
//! Occurrence lists keep insertion order (document-processing order). Terms
//! are kept in first-appearance order, which is also the tie-break order of
//! [`PositionalIndex::top_terms`].
//!
//! # Thread Safety
//!
//! All operations take `&self`. A document's occurrences are computed
//! before the write lock is taken and published in one step, so readers
//! never see a partially indexed document.

use crate::detect::{LanguageDetector, WordDistribution};
use lexis_core::{Language, LexisConfig, Result, Token};
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::occurrence::Occurrence;

// ============================================================================
// IndexStats
// ============================================================================

/// Summary counters of an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of distinct tokens
    pub unique_terms: usize,
    /// Number of recorded occurrences across all tokens
    pub total_occurrences: usize,
    /// Number of distinct document ids indexed
    pub documents: usize,
}

// ============================================================================
// IndexState
// ============================================================================

/// Token -> occurrences, with terms in first-appearance order.
#[derive(Debug, Default)]
struct IndexState {
    /// Token -> slot in `postings`
    slots: FxHashMap<Token, usize>,
    /// (token, occurrences) in first-appearance order
    postings: Vec<(Token, Vec<Occurrence>)>,
    /// Distinct document ids seen
    documents: FxHashSet<Arc<str>>,
    total_occurrences: usize,
}

impl IndexState {
    fn occurrences(&self, token: &str) -> Option<&[Occurrence]> {
        self.slots
            .get(token)
            .map(|&slot| self.postings[slot].1.as_slice())
    }

    fn append(&mut self, document_id: Arc<str>, entries: Vec<(Token, Occurrence)>) {
        self.documents.insert(document_id);
        self.total_occurrences += entries.len();
        for (token, occurrence) in entries {
            match self.slots.get(&token) {
                Some(&slot) => self.postings[slot].1.push(occurrence),
                None => {
                    self.slots.insert(token.clone(), self.postings.len());
                    self.postings.push((token, vec![occurrence]));
                }
            }
        }
    }
}

// ============================================================================
// PositionalIndex
// ============================================================================

/// Corpus-wide positional inverted index.
///
/// Owns its token map; independent instances share nothing but the
/// (read-only after build) language detector.
#[derive(Debug)]
pub struct PositionalIndex {
    state: RwLock<IndexState>,
    detector: Arc<LanguageDetector>,
    config: LexisConfig,
}

impl PositionalIndex {
    /// Create an empty index with the default configuration.
    pub fn new(detector: Arc<LanguageDetector>) -> Self {
        PositionalIndex {
            state: RwLock::new(IndexState::default()),
            detector,
            config: LexisConfig::default(),
        }
    }

    /// Create an empty index with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration is out of range.
    pub fn with_config(detector: Arc<LanguageDetector>, config: LexisConfig) -> Result<Self> {
        config.validate()?;
        Ok(PositionalIndex {
            state: RwLock::new(IndexState::default()),
            detector,
            config,
        })
    }

    /// The language detector used for indexing
    pub fn detector(&self) -> &Arc<LanguageDetector> {
        &self.detector
    }

    /// The active configuration
    pub fn config(&self) -> &LexisConfig {
        &self.config
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Index a document, detecting its language from the full text.
    ///
    /// The language is detected once for the whole document, from its
    /// English-rules word distribution, and applied to every paragraph. If
    /// detection abstains, the configured default language is used. Returns
    /// the language the document was indexed under.
    ///
    /// Re-indexing the same `document_id` appends a second set of
    /// occurrences; nothing is replaced.
    ///
    /// # Errors
    ///
    /// Returns `Precondition` if the detector has no models. Nothing is
    /// recorded in that case.
    pub fn index_document(&self, document_id: &str, full_text: &str) -> Result<Language> {
        let dist = self.detector.distribution_of(full_text, None);
        let classification = self
            .detector
            .classify(&dist, self.config.detection_threshold)?;

        let language = match classification.language {
            Some(language) => language,
            None => {
                tracing::warn!(
                    document_id = %document_id,
                    best_score = classification.score,
                    fallback = %self.config.default_language,
                    "Language detection abstained, using default language"
                );
                self.config.default_language.clone()
            }
        };

        self.index_document_as(document_id, full_text, language.clone());
        Ok(language)
    }

    /// Index a document under a caller-supplied language, bypassing detection.
    pub fn index_document_as(&self, document_id: &str, full_text: &str, language: Language) {
        let document_id: Arc<str> = Arc::from(document_id);
        let transformer = self.detector.transformer();

        let mut entries = Vec::new();
        let mut paragraphs = 0;
        for (paragraph_index, paragraph) in full_text
            .split(self.config.paragraph_delimiter.as_str())
            .enumerate()
        {
            paragraphs += 1;
            let tokens = transformer.tokenize_and_filter(paragraph, &language);
            for (word_position, token) in tokens.into_iter().enumerate() {
                let occurrence = Occurrence {
                    document_id: Arc::clone(&document_id),
                    paragraph_index,
                    word_position,
                    language: language.clone(),
                };
                entries.push((token, occurrence));
            }
        }

        tracing::debug!(
            document_id = %document_id,
            language = %language,
            paragraphs,
            occurrences = entries.len(),
            "Indexed document"
        );

        self.state.write().append(document_id, entries);
    }

    /// Index a collection of `(document_id, full_text)` pairs in order.
    ///
    /// Returns the number of documents indexed. Stops at the first error;
    /// documents indexed before it stay in the index.
    pub fn index_corpus<I, D, T>(&self, documents: I) -> Result<usize>
    where
        I: IntoIterator<Item = (D, T)>,
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let mut indexed = 0;
        for (document_id, text) in documents {
            self.index_document(document_id.as_ref(), text.as_ref())?;
            indexed += 1;
        }
        Ok(indexed)
    }

    // ========================================================================
    // Query
    // ========================================================================

    fn query_tokens(&self, query: &str) -> Vec<Token> {
        self.detector
            .transformer()
            .tokenize_and_filter(query, &self.config.default_language)
    }

    /// Occurrences of every query token present in the index.
    ///
    /// The query is tokenized under the default language (queries are not
    /// language-detected). Tokens absent from the index are omitted.
    pub fn search_term(&self, query: &str) -> BTreeMap<Token, Vec<Occurrence>> {
        let tokens = self.query_tokens(query);
        let state = self.state.read();

        let mut results = BTreeMap::new();
        for token in tokens {
            if let Some(occurrences) = state.occurrences(&token) {
                results.insert(token, occurrences.to_vec());
            }
        }

        tracing::debug!(query = %query, matched_terms = results.len(), "Term search");
        results
    }

    /// Starting occurrences of exact phrase matches.
    ///
    /// An occurrence `p` of the first query token matches if, for each later
    /// token at offset `i`, the index holds that token in the same document,
    /// paragraph and language at `p.word_position + i`. Matches are returned
    /// in the order of the first token's occurrence list.
    pub fn search_phrase(&self, query: &str) -> Vec<Occurrence> {
        let tokens = self.query_tokens(query);
        let Some((first, rest)) = tokens.split_first() else {
            return Vec::new();
        };

        let state = self.state.read();
        let Some(candidates) = state.occurrences(first) else {
            return Vec::new();
        };

        let mut followers: Vec<FxHashSet<&Occurrence>> = Vec::with_capacity(rest.len());
        for token in rest {
            match state.occurrences(token) {
                Some(occurrences) => followers.push(occurrences.iter().collect()),
                None => return Vec::new(),
            }
        }

        let results: Vec<Occurrence> = candidates
            .iter()
            .filter(|start| {
                followers
                    .iter()
                    .enumerate()
                    .all(|(i, set)| set.contains(&start.shifted(i + 1)))
            })
            .cloned()
            .collect();

        tracing::debug!(query = %query, matches = results.len(), "Phrase search");
        results
    }

    /// Occurrence list of a single normalized token.
    pub fn occurrences(&self, token: &str) -> Option<Vec<Occurrence>> {
        self.state.read().occurrences(token).map(<[Occurrence]>::to_vec)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Per-token counts across the index, optionally only for one language.
    ///
    /// Tokens with no matching occurrence are left out.
    pub fn word_distribution(&self, language: Option<&Language>) -> WordDistribution {
        let mut dist = WordDistribution::new();
        for (token, count) in self.term_counts(language) {
            dist.add_count(token, count);
        }
        dist
    }

    /// The `n` most frequent tokens, optionally only for one language.
    ///
    /// Sorted by descending count; equal counts keep the order in which the
    /// tokens first appeared in the index.
    pub fn top_terms(&self, n: usize, language: Option<&Language>) -> Vec<(Token, usize)> {
        let mut counts = self.term_counts(language);
        // Stable sort preserves first-appearance order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    /// Non-zero (token, count) pairs in first-appearance order.
    fn term_counts(&self, language: Option<&Language>) -> Vec<(Token, usize)> {
        let state = self.state.read();
        state
            .postings
            .iter()
            .filter_map(|(token, occurrences)| {
                let count = match language {
                    Some(lang) => occurrences.iter().filter(|o| &o.language == lang).count(),
                    None => occurrences.len(),
                };
                (count > 0).then(|| (token.clone(), count))
            })
            .collect()
    }

    /// Word distribution of a document without indexing it.
    ///
    /// The text is split into paragraphs and tokenized under `language`.
    pub fn analyze_document(&self, full_text: &str, language: &Language) -> WordDistribution {
        let transformer = self.detector.transformer();
        full_text
            .split(self.config.paragraph_delimiter.as_str())
            .flat_map(|paragraph| transformer.tokenize_and_filter(paragraph, language))
            .collect()
    }

    /// Summary counters
    pub fn stats(&self) -> IndexStats {
        let state = self.state.read();
        IndexStats {
            unique_terms: state.postings.len(),
            total_occurrences: state.total_occurrences,
            documents: state.documents.len(),
        }
    }

    /// All tokens in first-appearance order
    pub fn terms(&self) -> Vec<Token> {
        let state = self.state.read();
        state.postings.iter().map(|(t, _)| t.clone()).collect()
    }

    /// The first `n` tokens by first appearance, sorted alphabetically.
    pub fn sample_terms(&self, n: usize) -> Vec<Token> {
        let state = self.state.read();
        let mut sample: Vec<Token> = state
            .postings
            .iter()
            .take(n)
            .map(|(t, _)| t.clone())
            .collect();
        sample.sort();
        sample
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.state.read().postings.len()
    }

    /// Check if nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.state.read().postings.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
