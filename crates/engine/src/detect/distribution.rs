//! Word-frequency distributions

use lexis_core::Token;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from token to occurrence count.
///
/// Used both as a language's reference model and as the fingerprint of a
/// text being classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDistribution {
    counts: FxHashMap<Token, usize>,
}

impl WordDistribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a sequence of tokens.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut dist = Self::new();
        for token in tokens {
            dist.add(token);
        }
        dist
    }

    /// Increment the count of `token` by one.
    pub fn add(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Add `count` occurrences of `token`.
    pub fn add_count(&mut self, token: Token, count: usize) {
        if count > 0 {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }

    /// Merge another distribution into this one.
    pub fn merge(&mut self, other: &WordDistribution) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0) += count;
        }
    }

    /// Count for `token` (0 if absent)
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the distribution has no tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Euclidean norm of the count vector
    pub fn magnitude(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Iterate over `(token, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Consume into the underlying map
    pub fn into_inner(self) -> FxHashMap<Token, usize> {
        self.counts
    }
}

impl FromIterator<Token> for WordDistribution {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
