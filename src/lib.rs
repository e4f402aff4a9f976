//! # article-search
//!
//! Scoped article search over a CMS content object index.
//!
//! ## Features
//!
//! - Query term derivation (hyphen variants, stopword filtering, synonyms)
//! - Per-publication scopes with their own content types and field boosts
//! - Visibility and permalink exclusions, recency ordering, age filter
//! - Content type facets and category filtering
//! - Author cross-reference for Australian Prescriber
//! - Fixed-size pagination with display indices
//! - Pluggable object index backends, with an in-memory implementation

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod scope;
pub mod search;

pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::error::{ArticleSearchError, Result};
    pub use crate::index::{ContentItem, MemoryIndex, ObjectIndex};
    pub use crate::scope::Scope;
    pub use crate::search::{ArticleSearcher, SearchParams, SearchRequest, SearchResult, SortMode};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
