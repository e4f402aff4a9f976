//! Search results and pagination arithmetic.

use serde::Serialize;

use crate::analysis::TermSet;
use crate::index::ContentItem;
use crate::scope::Scope;
use crate::search::facet::Facets;
use crate::search::request::{SearchRequest, SortMode};

/// Fixed number of main results per page.
pub const HITS_PER_PAGE: usize = 10;

/// 1-based index of the first result on the page.
///
/// Not clamped: an offset past the end still reports `offset + 1`.
pub fn page_from(offset: usize) -> usize {
    offset.saturating_add(1)
}

/// 1-based index of the last result on the page, never above `total`.
pub fn page_to(offset: usize, total: usize) -> usize {
    offset.saturating_add(HITS_PER_PAGE).min(total)
}

/// The outcome of one search.
///
/// `articles` holds up to [`HITS_PER_PAGE`] main results followed by up to
/// [`HITS_PER_PAGE`] author-derived results, so a page may carry more than
/// `HITS_PER_PAGE` items when the author cross-reference contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    request: SearchRequest,
    terms: TermSet,
    articles: Vec<ContentItem>,
    facets: Facets,
    total: usize,
}

impl SearchResult {
    pub(crate) fn new(
        request: SearchRequest,
        terms: TermSet,
        articles: Vec<ContentItem>,
        facets: Facets,
        total: usize,
    ) -> Self {
        SearchResult {
            request,
            terms,
            articles,
            facets,
            total,
        }
    }

    /// Main matches plus author-derived matches.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Same aggregate as [`total`](Self::total), kept for page templates
    /// that label the paged count separately.
    pub fn page_total(&self) -> usize {
        self.total
    }

    pub fn from(&self) -> usize {
        page_from(self.request.offset)
    }

    pub fn to(&self) -> usize {
        page_to(self.request.offset, self.total)
    }

    pub fn has_results(&self) -> bool {
        self.total > 0
    }

    pub fn articles(&self) -> &[ContentItem] {
        &self.articles
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn offset(&self) -> usize {
        self.request.offset
    }

    pub fn scope(&self) -> Scope {
        self.request.scope
    }

    pub fn sort(&self) -> SortMode {
        self.request.sort
    }

    pub fn age(&self) -> u32 {
        self.request.age
    }

    pub fn category(&self) -> &str {
        &self.request.category
    }

    pub fn is_article_scope(&self) -> bool {
        self.request.scope.is_article_scope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(offset: usize, total: usize) -> SearchResult {
        SearchResult::new(
            SearchRequest::new("asthma").offset(offset),
            TermSet::default(),
            Vec::new(),
            Facets::new(),
            total,
        )
    }

    #[test]
    fn test_window_inside_results() {
        let result = result(10, 35);
        assert_eq!(result.from(), 11);
        assert_eq!(result.to(), 20);
        assert!(result.has_results());
    }

    #[test]
    fn test_last_partial_page() {
        let result = result(30, 35);
        assert_eq!(result.from(), 31);
        assert_eq!(result.to(), 35);
    }

    #[test]
    fn test_offset_past_total() {
        let result = result(20, 15);
        assert_eq!(result.from(), 21);
        assert_eq!(result.to(), 15);
    }

    #[test]
    fn test_no_results() {
        let result = result(0, 0);
        assert!(!result.has_results());
        assert_eq!(result.from(), 1);
        assert_eq!(result.to(), 0);
        assert_eq!(result.page_total(), 0);
    }

    #[test]
    fn test_to_never_exceeds_total() {
        for total in 0..40 {
            for offset in 0..50 {
                assert_eq!(page_to(offset, total), (offset + HITS_PER_PAGE).min(total));
                assert!(page_to(offset, total) <= total);
            }
        }
    }
}
