//! Article search: request handling, author cross-reference, facets and
//! pagination.
//!
//! [`ArticleSearcher`] is the entry point. It builds the article query for a
//! [`SearchRequest`], runs it against an [`ObjectIndex`](crate::index::ObjectIndex)
//! alongside the author cross-reference, and assembles a [`SearchResult`].

pub mod author;
pub mod engine;
pub mod facet;
pub mod request;
pub mod result;

pub use self::author::AuthorMatches;
pub use self::engine::ArticleSearcher;
pub use self::facet::{FacetCount, Facets};
pub use self::request::{ALL_CATEGORIES, SearchParams, SearchRequest, SortMode};
pub use self::result::{HITS_PER_PAGE, SearchResult, page_from, page_to};
