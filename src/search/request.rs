//! Search requests and coercion of raw request parameters.
//!
//! Web layers hand over loosely typed parameters. [`SearchParams`] accepts
//! them as optional strings and converts into a [`SearchRequest`] without
//! ever failing: malformed numbers become `0`, unknown scopes become
//! [`Scope::All`], a missing category becomes `"all"`.
//!
//! ```
//! use article_search::scope::Scope;
//! use article_search::search::{SearchParams, SearchRequest, SortMode};
//!
//! let params = SearchParams {
//!     q: Some("  asthma  ".to_string()),
//!     offset: Some("-10".to_string()),
//!     publication: Some("radar".to_string()),
//!     sort: Some("most-recent".to_string()),
//!     age: Some("6 months".to_string()),
//!     ..Default::default()
//! };
//! let request = SearchRequest::from(params);
//!
//! assert_eq!(request.query, "asthma");
//! assert_eq!(request.offset, 0);
//! assert_eq!(request.scope, Scope::Radar);
//! assert_eq!(request.sort, SortMode::MostRecent);
//! assert_eq!(request.age, 6);
//! assert_eq!(request.category_filter(), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::scope::Scope;

/// Category value meaning "no content type restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Sort parameter value selecting recency order.
pub const MOST_RECENT: &str = "most-recent";

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Index relevance order (boosted matches first).
    #[default]
    Relevance,
    /// Publication date, newest first.
    MostRecent,
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Trimmed query text; empty means "no term filter".
    pub query: String,
    pub scope: Scope,
    /// Zero-based index of the first main result to return.
    pub offset: usize,
    pub sort: SortMode,
    /// Only items published within this many months; 0 disables the filter.
    pub age: u32,
    /// Content type facet to restrict to, or `"all"`.
    pub category: String,
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            query: String::new(),
            scope: Scope::All,
            offset: 0,
            sort: SortMode::Relevance,
            age: 0,
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SearchRequest {
    /// Create a request for a query with default options.
    pub fn new<S: AsRef<str>>(query: S) -> Self {
        SearchRequest {
            query: query.as_ref().trim().to_string(),
            ..Default::default()
        }
    }

    /// Set the scope.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the offset.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort mode.
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Set the age filter in months.
    pub fn age(mut self, months: u32) -> Self {
        self.age = months;
        self
    }

    /// Set the category filter.
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category
        };
        self
    }

    /// The category to restrict to, `None` when unfiltered.
    pub fn category_filter(&self) -> Option<&str> {
        if self.category == ALL_CATEGORIES {
            None
        } else {
            Some(&self.category)
        }
    }

    pub fn is_most_recent(&self) -> bool {
        self.sort == SortMode::MostRecent
    }
}

/// Raw request parameters as received from a web layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub offset: Option<String>,
    pub scope: Option<String>,
    /// Alias for `scope` used by publication landing pages.
    pub publication: Option<String>,
    pub sort: Option<String>,
    pub age: Option<String>,
    pub category: Option<String>,
}

impl From<SearchParams> for SearchRequest {
    fn from(params: SearchParams) -> Self {
        let scope_name = params.scope.as_deref().or(params.publication.as_deref());
        let sort = match params.sort.as_deref() {
            Some(MOST_RECENT) => SortMode::MostRecent,
            _ => SortMode::Relevance,
        };

        SearchRequest::new(params.q.unwrap_or_default())
            .scope(Scope::resolve(scope_name))
            .offset(coerce_count(params.offset.as_deref()))
            .sort(sort)
            .age(u32::try_from(coerce_count(params.age.as_deref())).unwrap_or(u32::MAX))
            .category(params.category.unwrap_or_else(|| ALL_CATEGORIES.to_string()))
    }
}

/// Parse the leading integer of a parameter, clamping negatives and
/// garbage to zero.
///
/// `"12abc"` is 12, `"abc"` is 0, `"-3"` is 0.
pub fn coerce_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 0;
    };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(usize::MAX)
}
