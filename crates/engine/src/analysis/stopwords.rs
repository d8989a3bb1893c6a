//! Built-in stop-word tables
//!
//! High-frequency function words carry little discriminative value and are
//! dropped before indexing, querying and language modelling. The tables are
//! matched against lowercased tokens after punctuation stripping, so the
//! contracted forms ("don't") never match a token; they are kept so the
//! tables stay complete for callers that tokenize differently.

/// English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "is", "are", "was", "were", "in", "on",
    "at", "by", "for", "with", "about", "of", "to", "from", "as", "it", "i", "you", "he", "she",
    "they", "we", "me", "my", "your", "his", "her", "myself", "our", "ours", "ourselves",
    "yourself", "yourselves", "him", "himself", "hers", "herself", "its", "itself", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "these",
    "those", "am", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "would", "should", "could", "ought", "i'm", "you're", "he's", "she's", "it's",
    "we're", "they're", "i've", "you've", "we've", "they've", "i'd", "you'd", "he'd", "she'd",
    "we'd", "they'd", "i'll", "you'll", "he'll", "she'll", "we'll", "they'll", "isn't", "aren't",
    "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't",
    "wouldn't", "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's",
    "that's", "who's", "what's", "here's", "there's", "when's", "where's", "why's", "how's",
    "because", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "up", "down", "out", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
];

/// French stop words, including elided articles and pronouns (`l`, `d`, `qu`).
pub const FRENCH_STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "de", "du", "à", "au", "aux", "et", "ou", "mais",
    "donc", "or", "ni", "car", "ce", "cet", "cette", "ces", "mon", "ton", "son", "ma", "ta", "sa",
    "mes", "tes", "ses", "notre", "votre", "leur", "nos", "vos", "leurs", "je", "tu", "il",
    "elle", "nous", "vous", "ils", "elles", "me", "te", "se", "moi", "toi", "lui", "eux", "qui",
    "que", "quoi", "dont", "où", "dans", "sur", "sous", "avec", "sans", "pour", "par", "en",
    "vers", "chez", "être", "avoir", "faire", "dire", "aller", "voir", "savoir", "pouvoir",
    "vouloir", "venir", "falloir", "devoir", "croire", "trouver", "donner", "prendre", "parler",
    "aimer", "passer", "mettre", "est", "sont", "était", "étaient", "sera", "seront", "été", "ai",
    "as", "a", "avons", "avez", "ont", "avait", "avaient", "aura", "auront", "eu", "suis", "es",
    "sommes", "êtes", "puis", "peut", "peuvent", "d", "l", "c", "s", "n", "m", "t", "j", "qu",
    "y", "si", "ne", "pas", "plus", "tous", "tout", "toute", "toutes", "autre", "autres",
    "même", "mêmes", "tel", "telle", "tels", "telles", "quel", "quelle", "quels", "quelles",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for word in ENGLISH_STOP_WORDS.iter().chain(FRENCH_STOP_WORDS) {
            assert_eq!(*word, word.to_lowercase(), "{} is not lowercase", word);
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn test_english_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for word in ENGLISH_STOP_WORDS {
            assert!(seen.insert(word), "duplicate stop word {}", word);
        }
    }

    #[test]
    fn test_french_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for word in FRENCH_STOP_WORDS {
            assert!(seen.insert(word), "duplicate stop word {}", word);
        }
    }
}
