//! Synonym dictionary used to widen the term set.
//!
//! Entries map a word to the words that should also be searched for when it
//! appears in a query. Keys are stored lowercase so lookups ignore case.
//!
//! ```
//! use article_search::analysis::synonym::SynonymDictionary;
//!
//! let mut synonyms = SynonymDictionary::new();
//! synonyms.insert("Paracetamol", vec!["acetaminophen".to_string()]);
//!
//! assert_eq!(synonyms.lookup("paracetamol").unwrap(), ["acetaminophen"]);
//! assert!(synonyms.lookup("ibuprofen").is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Word to synonyms table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SynonymDictionary {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add synonyms for a word, merging with any existing entry.
    pub fn insert<S: AsRef<str>>(&mut self, word: S, synonyms: Vec<String>) {
        let key = word.as_ref().trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let entry = self.entries.entry(key.clone()).or_default();
        for synonym in synonyms {
            let synonym = synonym.trim().to_string();
            if synonym.is_empty() || synonym.eq_ignore_ascii_case(&key) {
                continue;
            }
            if !entry.contains(&synonym) {
                entry.push(synonym);
            }
        }
    }

    /// Synonyms registered for a word.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .filter(|synonyms| !synonyms.is_empty())
    }

    /// Number of words with synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for SynonymDictionary {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut dictionary = SynonymDictionary::new();
        for (word, synonyms) in raw {
            dictionary.insert(word, synonyms);
        }
        dictionary
    }
}

impl From<SynonymDictionary> for BTreeMap<String, Vec<String>> {
    fn from(dictionary: SynonymDictionary) -> Self {
        dictionary.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_merges_and_dedups() {
        let mut synonyms = SynonymDictionary::new();
        synonyms.insert("flu", vec!["influenza".to_string()]);
        synonyms.insert("FLU", vec!["influenza".to_string(), "grippe".to_string()]);

        assert_eq!(synonyms.len(), 1);
        assert_eq!(synonyms.lookup("Flu").unwrap(), ["influenza", "grippe"]);
    }

    #[test]
    fn test_self_reference_and_blanks_ignored() {
        let mut synonyms = SynonymDictionary::new();
        synonyms.insert("gp", vec!["GP".to_string(), " ".to_string()]);
        assert!(synonyms.lookup("gp").is_none());
    }

    #[test]
    fn test_deserialize_normalizes_keys() {
        let synonyms: SynonymDictionary =
            serde_json::from_str(r#"{"Asthma": ["wheeze"]}"#).unwrap();
        assert_eq!(synonyms.lookup("asthma").unwrap(), ["wheeze"]);
    }
}
