//! Character statistics helpers
//!
//! Small text-analysis utilities: counting reference characters in an input,
//! turning counts into frequencies, masking counted characters, and listing
//! raw words without stop-word filtering.

use rustc_hash::{FxHashMap, FxHashSet};

/// Count, for each distinct character of `reference`, its occurrences in `input`.
///
/// Entries follow the first-appearance order of characters in `reference`.
/// Characters of `reference` absent from `input` are reported with count 0.
///
/// # Example
///
/// ```
/// use lexis_engine::analysis::count_chars;
///
/// assert_eq!(count_chars("ab", "banana"), vec![('a', 3), ('b', 1)]);
/// ```
pub fn count_chars(reference: &str, input: &str) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut slots: FxHashMap<char, usize> = FxHashMap::default();
    for c in reference.chars() {
        slots.entry(c).or_insert_with(|| {
            counts.push((c, 0));
            counts.len() - 1
        });
    }
    for c in input.chars() {
        if let Some(&slot) = slots.get(&c) {
            counts[slot].1 += 1;
        }
    }
    counts
}

/// Convert character counts into frequencies relative to the length of `input`.
///
/// Length is measured in characters. An empty `input` yields 0.0 for every
/// entry.
pub fn char_frequencies(input: &str, counts: &[(char, usize)]) -> Vec<(char, f64)> {
    let len = input.chars().count();
    counts
        .iter()
        .map(|&(c, n)| {
            let freq = if len == 0 { 0.0 } else { n as f64 / len as f64 };
            (c, freq)
        })
        .collect()
}

/// Replace every character of `input` that has a positive count with `replacement`.
pub fn replace_counted_chars(replacement: char, input: &str, counts: &[(char, usize)]) -> String {
    let counted: FxHashSet<char> = counts
        .iter()
        .filter(|&&(_, n)| n > 0)
        .map(|&(c, _)| c)
        .collect();
    input
        .chars()
        .map(|c| if counted.contains(&c) { replacement } else { c })
        .collect()
}

/// List lowercase maximal runs of `[a-z']`, with no stop-word filtering.
///
/// # Example
///
/// ```
/// use lexis_engine::analysis::list_words;
///
/// assert_eq!(list_words("It's THE end."), vec!["it's", "the", "end"]);
/// ```
pub fn list_words(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    let mut words = Vec::new();
    let mut current = String::new();
    for c in lowered.chars() {
        if c.is_ascii_alphabetic() || c == '\'' {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
