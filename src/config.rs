//! Configuration for the article searcher.
//!
//! The static tables (scope allow-lists, field boosts, stopwords) are not
//! configurable. [`SearchConfig`] only covers the tunables around them and
//! can be read from a JSON file:
//!
//! ```json
//! {
//!   "facet_limit": 50,
//!   "date_attribute": "search_date",
//!   "author_lookup": true,
//!   "synonyms": { "antibiotics": ["antimicrobials"] }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::SynonymDictionary;
use crate::error::{ArticleSearchError, Result};

/// Default maximum number of distinct facet values returned per facet call.
pub const DEFAULT_FACET_LIMIT: usize = 50;

/// Default attribute holding an item's publication date.
pub const DEFAULT_DATE_ATTRIBUTE: &str = "search_date";

/// Tunables for [`ArticleSearcher`](crate::search::ArticleSearcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of distinct content types reported in facet counts.
    pub facet_limit: usize,
    /// Attribute used for recency ordering and the age filter.
    pub date_attribute: String,
    /// Allow the author cross-reference for scopes that support it.
    pub author_lookup: bool,
    /// Synonyms appended to the derived term set.
    pub synonyms: SynonymDictionary,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            facet_limit: DEFAULT_FACET_LIMIT,
            date_attribute: DEFAULT_DATE_ATTRIBUTE.to_string(),
            author_lookup: true,
            synonyms: SynonymDictionary::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new builder for SearchConfig.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ArticleSearchError::config(format!("cannot open {}: {e}", path.display()))
        })?;
        let config: SearchConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        log::debug!("loaded search config from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for values the searcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.facet_limit == 0 {
            return Err(ArticleSearchError::config("facet_limit must be positive"));
        }
        if self.date_attribute.trim().is_empty() {
            return Err(ArticleSearchError::config("date_attribute must not be empty"));
        }
        Ok(())
    }
}

/// Builder for SearchConfig.
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    facet_limit: Option<usize>,
    date_attribute: Option<String>,
    author_lookup: Option<bool>,
    synonyms: Option<SynonymDictionary>,
}

impl SearchConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the facet limit.
    pub fn facet_limit(mut self, limit: usize) -> Self {
        self.facet_limit = Some(limit);
        self
    }

    /// Set the publication date attribute.
    pub fn date_attribute<S: Into<String>>(mut self, attribute: S) -> Self {
        self.date_attribute = Some(attribute.into());
        self
    }

    /// Enable or disable the author cross-reference.
    pub fn author_lookup(mut self, enabled: bool) -> Self {
        self.author_lookup = Some(enabled);
        self
    }

    /// Set the synonym dictionary.
    pub fn synonyms(mut self, synonyms: SynonymDictionary) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    /// Build the SearchConfig.
    pub fn build(self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            facet_limit: self.facet_limit.unwrap_or(defaults.facet_limit),
            date_attribute: self.date_attribute.unwrap_or(defaults.date_attribute),
            author_lookup: self.author_lookup.unwrap_or(defaults.author_lookup),
            synonyms: self.synonyms.unwrap_or(defaults.synonyms),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.facet_limit, 50);
        assert_eq!(config.date_attribute, "search_date");
        assert!(config.author_lookup);
        assert!(config.synonyms.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SearchConfig::builder()
            .facet_limit(5)
            .author_lookup(false)
            .build();
        assert_eq!(config.facet_limit, 5);
        assert!(!config.author_lookup);
        assert_eq!(config.date_attribute, DEFAULT_DATE_ATTRIBUTE);
    }

    #[test]
    fn test_validate_rejects_zero_facet_limit() {
        let config = SearchConfig::builder().facet_limit(0).build();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ArticleSearchError::Config(_)));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"facet_limit": 20, "synonyms": {{"flu": ["influenza"]}}}}"#
        )
        .unwrap();

        let config = SearchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.facet_limit, 20);
        assert!(config.author_lookup);
        assert_eq!(config.synonyms.lookup("flu"), Some(&["influenza".to_string()][..]));
    }

    #[test]
    fn test_from_file_missing() {
        let err = SearchConfig::from_file("/nonexistent/article-search.json").unwrap_err();
        assert!(matches!(err, ArticleSearchError::Config(_)));
    }
}
