//! Derivation of search terms from raw query text.
//!
//! A query is turned into terms two ways:
//!
//! - **derived terms**: every hyphenated pair (`anti-biotics`) contributes the
//!   hyphenated form, each part (`anti`, `biotics`) and the parts joined
//!   without hyphens (`antibiotics`);
//! - **processed terms**: the query split on anything that is not
//!   alphanumeric, `_` or `-`, with short tokens and stopwords dropped, then
//!   joined back into a single space-separated term.
//!
//! The union of both, without duplicates or empty entries, is the [`TermSet`].
//!
//! ```
//! use article_search::analysis::TermProcessor;
//!
//! let terms = TermProcessor::default().process("anti-biotics");
//! assert_eq!(terms.as_slice(), ["anti-biotics", "anti", "biotics", "antibiotics"]);
//!
//! // Nothing worth searching for: no term filter at all.
//! assert!(TermProcessor::default().process("to be or not").is_empty());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::stop::is_stop_word;
use crate::analysis::synonym::SynonymDictionary;

/// Tokens with this many characters or fewer are dropped.
pub const MIN_TERM_LENGTH: usize = 2;

static HYPHENATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_]+-[A-Za-z0-9_]+").expect("hyphen pattern should be valid")
});

static TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("separator pattern should be valid"));

/// Hyphen variants of every `word-word` pair in `query`.
///
/// Pairs do not overlap: `covid-19-vaccine` yields the `covid-19` pair only.
/// Returns an empty list when the query has no hyphenated pair.
pub fn derived_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for hyphenated in HYPHENATED.find_iter(query) {
        let hyphenated = hyphenated.as_str();
        terms.push(hyphenated.to_string());
        terms.extend(hyphenated.split('-').map(str::to_string));
        terms.push(hyphenated.replace('-', ""));
    }
    terms
}

/// The query with short tokens and stopwords removed, as a single term.
///
/// Always a one-element list; the element is empty when nothing survives.
pub fn processed_terms(query: &str) -> Vec<String> {
    let kept: Vec<&str> = TOKEN_SEPARATOR
        .split(query)
        .filter(|token| token.chars().count() > MIN_TERM_LENGTH && !is_stop_word(token))
        .collect();
    vec![kept.join(" ")]
}

/// Ordered, de-duplicated search terms for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    /// Build a set from candidate terms, keeping first occurrences and
    /// dropping blank entries.
    pub fn from_terms<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = TermSet::default();
        for term in candidates {
            set.push(term.into());
        }
        set
    }

    fn push(&mut self, term: String) {
        let term = term.trim();
        if !term.is_empty() && !self.terms.iter().any(|t| t == term) {
            self.terms.push(term.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Turns raw query text into a [`TermSet`].
#[derive(Debug, Clone, Default)]
pub struct TermProcessor {
    synonyms: SynonymDictionary,
}

impl TermProcessor {
    /// Create a processor that also expands synonyms.
    pub fn with_synonyms(synonyms: SynonymDictionary) -> Self {
        TermProcessor { synonyms }
    }

    /// Compute the term set for a query.
    ///
    /// Blank queries yield an empty set, meaning no term filter applies.
    pub fn process(&self, query: &str) -> TermSet {
        let query = query.trim();
        if query.is_empty() {
            return TermSet::default();
        }

        let mut set = TermSet::from_terms(
            derived_terms(query)
                .into_iter()
                .chain(processed_terms(query)),
        );

        if !self.synonyms.is_empty() {
            let base = set.terms.clone();
            for term in &base {
                self.expand(&mut set, term);
                if term.contains(' ') {
                    for word in term.split(' ') {
                        self.expand(&mut set, word);
                    }
                }
            }
        }

        log::trace!("query expanded into {} terms", set.len());
        set
    }

    fn expand(&self, set: &mut TermSet, word: &str) {
        if let Some(synonyms) = self.synonyms.lookup(word) {
            for synonym in synonyms {
                set.push(synonym.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_terms_single_hyphen() {
        assert_eq!(derived_terms("a-b"), vec!["a-b", "a", "b", "ab"]);
    }

    #[test]
    fn test_derived_terms_every_run() {
        let terms = derived_terms("non-steroidal anti-inflammatory");
        assert_eq!(
            terms,
            vec![
                "non-steroidal",
                "non",
                "steroidal",
                "nonsteroidal",
                "anti-inflammatory",
                "anti",
                "inflammatory",
                "antiinflammatory",
            ]
        );
    }

    #[test]
    fn test_derived_terms_hyphen_chain_uses_leading_pair() {
        assert_eq!(derived_terms("covid-19-vaccine"), vec!["covid-19", "covid", "19", "covid19"]);

        let terms = TermProcessor::default().process("covid-19-vaccine");
        for term in ["covid-19", "covid", "19", "covid19", "covid-19-vaccine"] {
            assert!(terms.contains(term), "missing {term}");
        }
        assert!(!terms.contains("vaccine"));
    }

    #[test]
    fn test_derived_terms_without_hyphen() {
        assert!(derived_terms("asthma inhaler").is_empty());
        assert!(derived_terms("trailing- hyphen").is_empty());
    }

    #[test]
    fn test_processed_terms_filters_short_and_stop_words() {
        assert_eq!(
            processed_terms("the treatment of GP asthma"),
            vec!["treatment asthma"]
        );
        assert_eq!(processed_terms("to be or"), vec![""]);
    }

    #[test]
    fn test_processed_terms_keeps_capitalised_stop_words() {
        assert_eq!(processed_terms("The heart"), vec!["The heart"]);
        assert_eq!(processed_terms("the heart"), vec!["heart"]);
    }

    #[test]
    fn test_processed_terms_keeps_hyphens_and_underscores() {
        assert_eq!(
            processed_terms("beta-blockers, heart_failure!"),
            vec!["beta-blockers heart_failure"]
        );
    }

    #[test]
    fn test_process_blank_query() {
        let processor = TermProcessor::default();
        assert!(processor.process("").is_empty());
        assert!(processor.process("   \t").is_empty());
    }

    #[test]
    fn test_process_only_stop_words_and_short_tokens() {
        let processor = TermProcessor::default();
        assert!(processor.process("is it an ox").is_empty());
    }

    #[test]
    fn test_process_dedups() {
        let terms = TermProcessor::default().process("anti-biotics");
        assert_eq!(terms.len(), 4);
        assert!(terms.contains("anti-biotics"));
        assert!(terms.contains("antibiotics"));
    }

    #[test]
    fn test_process_short_hyphen_parts_survive_in_derived_terms() {
        let terms = TermProcessor::default().process("B-12");
        assert_eq!(terms.as_slice(), ["B-12", "B", "12", "B12"]);
    }

    #[test]
    fn test_process_with_synonyms() {
        let mut synonyms = SynonymDictionary::new();
        synonyms.insert("paracetamol", vec!["acetaminophen".to_string()]);
        synonyms.insert("fever", vec!["pyrexia".to_string()]);
        let processor = TermProcessor::with_synonyms(synonyms);

        let terms = processor.process("paracetamol fever");
        assert_eq!(
            terms.as_slice(),
            ["paracetamol fever", "acetaminophen", "pyrexia"]
        );
    }
}
