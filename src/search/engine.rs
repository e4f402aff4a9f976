//! The article searcher.

use chrono::{DateTime, Utc};

use crate::analysis::TermSet;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::{ContentItem, ObjectIndex};
use crate::query::builder::{ArticleQuery, ArticleQueryBuilder};
use crate::query::Field;
use crate::search::author::{self, AuthorMatches};
use crate::search::facet::Facets;
use crate::search::request::SearchRequest;
use crate::search::result::{HITS_PER_PAGE, SearchResult};

/// Main (non author-derived) part of a search.
#[derive(Debug)]
struct MainMatches {
    total: usize,
    facets: Facets,
    items: Vec<ContentItem>,
}

/// Runs article searches against an object index.
///
/// The searcher holds no per-request state; one instance can serve
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use article_search::index::{ContentItem, MemoryIndex};
/// use article_search::scope::Scope;
/// use article_search::search::{ArticleSearcher, SearchRequest};
///
/// let index = MemoryIndex::with_items(vec![
///     ContentItem::new("1", "Cms::RadarArticlePage")
///         .with_type_facet("Radar")
///         .with_text("title", "Statins for primary prevention"),
/// ]);
/// let searcher = ArticleSearcher::with_defaults(index);
///
/// let result = searcher
///     .search(&SearchRequest::new("statins").scope(Scope::Radar))
///     .unwrap();
/// assert_eq!(result.total(), 1);
/// assert_eq!((result.from(), result.to()), (1, 1));
/// ```
#[derive(Debug)]
pub struct ArticleSearcher<I> {
    index: I,
    config: SearchConfig,
    builder: ArticleQueryBuilder,
}

impl<I: ObjectIndex> ArticleSearcher<I> {
    /// Create a searcher after validating its configuration.
    pub fn new(index: I, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let builder = ArticleQueryBuilder::new(&config);
        Ok(ArticleSearcher {
            index,
            config,
            builder,
        })
    }

    /// Create a searcher with the default configuration.
    pub fn with_defaults(index: I) -> Self {
        let config = SearchConfig::default();
        ArticleSearcher {
            builder: ArticleQueryBuilder::new(&config),
            index,
            config,
        }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The term set a query would be matched with.
    pub fn terms(&self, query: &str) -> TermSet {
        self.builder.processor().process(query)
    }

    /// The article query for a request, without running it.
    pub fn build_query(&self, request: &SearchRequest, now: DateTime<Utc>) -> ArticleQuery {
        self.builder.build(request, now)
    }

    /// Run a search, resolving the age filter against the current time.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        self.search_at(request, Utc::now())
    }

    /// Run a search, resolving the age filter against `now`.
    pub fn search_at(&self, request: &SearchRequest, now: DateTime<Utc>) -> Result<SearchResult> {
        let query = self.build_query(request, now);
        let author_lookup = self.config.author_lookup && request.scope.supports_author_lookup();

        let (main, authors) = rayon::join(
            || self.run_main(&query, request.offset),
            || {
                if author_lookup {
                    author::cross_reference(&self.index, &request.query, self.config.facet_limit)
                } else {
                    Ok(AuthorMatches::default())
                }
            },
        );
        let main = main?;
        let authors = authors?;

        let total = main.total + authors.total;
        let mut facets = main.facets;
        let mut articles = main.items;
        if !authors.is_empty() {
            log::debug!("{} items credited to matching authors", authors.total);
            facets.merge(authors.facets);
            articles.extend(authors.items);
        }

        log::debug!(
            "{} search: {} main, {} on page",
            request.scope,
            main.total,
            articles.len()
        );

        Ok(SearchResult::new(
            request.clone(),
            query.terms,
            articles,
            facets,
            total,
        ))
    }

    fn run_main(&self, query: &ArticleQuery, offset: usize) -> Result<MainMatches> {
        let facets = self
            .index
            .facet(&query.base, &Field::TypeFacet, self.config.facet_limit)?;
        let filtered = query.filtered();
        let total = self.index.count(&filtered)?;
        let items = if offset < total {
            self.index.page(&filtered, HITS_PER_PAGE, offset)?
        } else {
            Vec::new()
        };
        Ok(MainMatches {
            total,
            facets,
            items,
        })
    }
}
