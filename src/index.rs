//! The object index this crate searches.
//!
//! The CMS owns the real index; this crate only needs the handful of
//! operations in [`ObjectIndex`]. [`MemoryIndex`] implements them over an
//! in-memory item list and backs the command line tool and the tests.

pub mod item;
pub mod memory;

use std::fmt::Debug;

use crate::error::Result;
use crate::query::{Field, ObjectQuery};
use crate::search::facet::Facets;

// Re-export commonly used types
pub use item::ContentItem;
pub use memory::MemoryIndex;

/// Read access to a content object index.
///
/// Implementations report an unreachable backend as
/// [`ArticleSearchError::Backend`](crate::error::ArticleSearchError::Backend);
/// queries that match nothing return empty results, never errors.
pub trait ObjectIndex: Send + Sync + Debug {
    /// Number of items matching the query.
    fn count(&self, query: &ObjectQuery) -> Result<usize>;

    /// Up to `size` matching items starting at `offset`, in query order.
    fn page(&self, query: &ObjectQuery, size: usize, offset: usize) -> Result<Vec<ContentItem>>;

    /// Item counts per distinct value of `field`, largest first, at most
    /// `limit` values.
    fn facet(&self, query: &ObjectQuery, field: &Field, limit: usize) -> Result<Facets>;

    /// Every matching item.
    fn fetch_all(&self, query: &ObjectQuery) -> Result<Vec<ContentItem>> {
        let count = self.count(query)?;
        if count == 0 {
            return Ok(Vec::new());
        }
        self.page(query, count, 0)
    }
}
