//! Stopwords dropped from processed query terms.
//!
//! # Examples
//!
//! ```
//! use article_search::analysis::stop::is_stop_word;
//!
//! assert!(is_stop_word("the"));
//! assert!(!is_stop_word("The"));
//! assert!(!is_stop_word("asthma"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
///
/// Articles, prepositions and conjunctions that carry no search intent.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Check whether a token is a stopword. Matching is case-sensitive.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_STOP_WORDS_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_word_set_matches_list() {
        assert_eq!(ENGLISH_STOP_WORDS_SET.len(), ENGLISH_STOP_WORDS.len());
        for word in ENGLISH_STOP_WORDS {
            assert!(is_stop_word(word));
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(is_stop_word("with"));
        assert!(!is_stop_word("WITH"));
        assert!(!is_stop_word("There"));
        assert!(!is_stop_word("therapy"));
    }
}
