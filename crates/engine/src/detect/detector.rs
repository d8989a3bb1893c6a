//! Language detector
//!
//! Builds one reference [`WordDistribution`] per language from a corpus and
//! classifies arbitrary text by cosine similarity against every model.
//!
//! # Thread Safety
//!
//! Models live behind a `parking_lot::RwLock`. A model is fully built before
//! the write lock is taken, so `classify` never observes a half-built model.
//!
//! # Determinism
//!
//! Models are kept in a `BTreeMap` keyed by language code. The best score
//! wins; on an exact tie the lexicographically smallest code wins.

use super::corpus::{CorpusSource, TextCorpus};
use super::distribution::WordDistribution;
use super::similarity::similarity;
use crate::analysis::Transformer;
use lexis_core::{Error, Language, Result};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Full result of classifying a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Best-scoring language, or `None` if its score is below the threshold
    pub language: Option<Language>,
    /// Score of the best-scoring language, reported even when `language` is `None`
    pub score: f64,
    /// Score against every stored model
    pub scores: BTreeMap<Language, f64>,
}

/// Word-distribution language detector.
#[derive(Debug, Default)]
pub struct LanguageDetector {
    transformer: Transformer,
    models: RwLock<BTreeMap<Language, Arc<WordDistribution>>>,
}

impl LanguageDetector {
    /// Create a detector with no models and the default transformer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector that tokenizes with a custom transformer.
    pub fn with_transformer(transformer: Transformer) -> Self {
        LanguageDetector {
            transformer,
            models: RwLock::new(BTreeMap::new()),
        }
    }

    /// The transformer used for models and input texts
    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    // ========================================================================
    // Model Building
    // ========================================================================

    /// Build the reference model for `language` from a corpus.
    ///
    /// Every document is tokenized under `language` and all surviving tokens
    /// are counted. Any previous model for the language is replaced.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the source does not exist, and `InvalidInput` if
    /// the corpus yields no tokens (models are never empty).
    pub fn build_model<S>(&self, source: &S, language: Language) -> Result<()>
    where
        S: CorpusSource + ?Sized,
    {
        let documents = source.documents()?;

        let mut model = WordDistribution::new();
        for doc in &documents {
            for token in self.transformer.tokenize_and_filter(doc, &language) {
                model.add(token);
            }
        }

        if model.is_empty() {
            return Err(Error::invalid_input(format!(
                "corpus for language '{}' produced no tokens",
                language
            )));
        }

        tracing::debug!(
            language = %language,
            documents = documents.len(),
            tokens = model.total(),
            vocabulary = model.len(),
            "Built language model"
        );

        self.models.write().insert(language, Arc::new(model));
        Ok(())
    }

    /// Build the reference model for `language` from a single text.
    pub fn build_model_from_text(&self, text: &str, language: Language) -> Result<()> {
        self.build_model(&TextCorpus::new([text]), language)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Languages with a model, in code order
    pub fn languages(&self) -> Vec<Language> {
        self.models.read().keys().cloned().collect()
    }

    /// Check if any model has been built
    pub fn has_models(&self) -> bool {
        !self.models.read().is_empty()
    }

    /// The model stored for `language`, if any
    pub fn model(&self, language: &Language) -> Option<Arc<WordDistribution>> {
        self.models.read().get(language).cloned()
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Word distribution of `text`, tokenized under `language` (English if `None`).
    ///
    /// Does not touch the stored models.
    pub fn distribution_of(&self, text: &str, language: Option<&Language>) -> WordDistribution {
        let default = Language::english();
        let language = language.unwrap_or(&default);
        WordDistribution::from_tokens(self.transformer.tokenize_and_filter(text, language))
    }

    /// Classify a distribution against every stored model.
    ///
    /// `language` is `None` when the best score is below `threshold`; the
    /// best score and the full score map are reported regardless.
    ///
    /// # Errors
    ///
    /// Returns `Precondition` if no model has been built yet.
    pub fn classify(&self, dist: &WordDistribution, threshold: f64) -> Result<Classification> {
        let models = self.models.read();
        if models.is_empty() {
            return Err(Error::precondition(
                "no language models available; build models before classifying",
            ));
        }

        let scores: BTreeMap<Language, f64> = models
            .iter()
            .map(|(lang, model)| (lang.clone(), similarity(dist, model)))
            .collect();
        drop(models);

        let mut best: Option<(&Language, f64)> = None;
        for (lang, &score) in &scores {
            // Strictly greater: ties keep the earlier (smaller) code.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((lang, score));
            }
        }

        let (best_language, score) = match best {
            Some((lang, score)) => (lang.clone(), score),
            None => return Err(Error::precondition("no language models available")),
        };
        let language = (score >= threshold).then_some(best_language);

        Ok(Classification {
            language,
            score,
            scores,
        })
    }

    /// Classify and return only the detected language.
    pub fn classify_language_only(
        &self,
        dist: &WordDistribution,
        threshold: f64,
    ) -> Result<Option<Language>> {
        Ok(self.classify(dist, threshold)?.language)
    }
}
