//! Cosine similarity between word distributions.
//!
//! Distributions are sparse vectors over the union of their keys; a key
//! missing from one side contributes 0 to the dot product. Counts are
//! non-negative, so scores fall in `[0, 1]` ("higher = more similar").
//! Cosine similarity ignores vector length, which lets a short text be
//! compared with a whole reference corpus.

use super::distribution::WordDistribution;

/// Compute cosine similarity between two distributions.
///
/// Returns 0.0 if either distribution is empty or has zero magnitude.
///
/// # Example
///
/// ```
/// use lexis_engine::detect::{similarity, WordDistribution};
///
/// let a: WordDistribution = ["cat".to_string(), "dog".to_string()].into_iter().collect();
/// assert!((similarity(&a, &a) - 1.0).abs() < 1e-9);
/// assert_eq!(similarity(&a, &WordDistribution::new()), 0.0);
/// ```
pub fn similarity(a: &WordDistribution, b: &WordDistribution) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let norm_a = a.magnitude();
    let norm_b = b.magnitude();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Only shared keys contribute; walk the smaller side.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .map(|(token, count)| count as f64 * large.count(token) as f64)
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn dist(words: &[&str]) -> WordDistribution {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_is_one() {
        let a = dist(&["cat", "cat", "dog"]);
        assert!((similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let a = dist(&["cat"]);
        let b = dist(&["chat"]);
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let a = dist(&["cat"]);
        let empty = WordDistribution::new();
        assert_eq!(similarity(&a, &empty), 0.0);
        assert_eq!(similarity(&empty, &a), 0.0);
        assert_eq!(similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_known_value() {
        // a = (1, 1, 0), b = (1, 0, 1) over {x, y, z}: cos = 1 / 2
        let a = dist(&["x", "y"]);
        let b = dist(&["x", "z"]);
        assert!((similarity(&a, &b) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_length_insensitive() {
        let short = dist(&["cat", "dog"]);
        let long = dist(&["cat", "cat", "cat", "dog", "dog", "dog"]);
        assert!((similarity(&short, &long) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = dist(&["x", "x", "y"]);
        let b = dist(&["x", "z", "z", "z"]);
        assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_similarity_bounded(
            a in vec("[a-e]{1,3}", 0..40),
            b in vec("[a-e]{1,3}", 0..40),
        ) {
            let da: WordDistribution = a.into_iter().collect();
            let db: WordDistribution = b.into_iter().collect();
            let s = similarity(&da, &db);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn prop_self_similarity_is_one(a in vec("[a-z]{1,6}", 1..40)) {
            let da: WordDistribution = a.into_iter().collect();
            prop_assert!((similarity(&da, &da) - 1.0).abs() < 1e-9);
        }
    }
}
