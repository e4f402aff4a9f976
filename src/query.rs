//! Query construction against the object index.
//!
//! - [`predicate`] - fields, operators and single conditions
//! - [`object`] - [`ObjectQuery`], a chain of conditions over a type
//!   allow-list, mirroring the index's `where/and/and_not/order` API
//! - [`builder`] - [`ArticleQueryBuilder`], which turns a search request into
//!   the filtered, boosted article query

pub mod builder;
pub mod object;
pub mod predicate;

// Re-export commonly used types
pub use builder::{ArticleQuery, ArticleQueryBuilder, FEEDBACK_PERMALINK, THANK_YOU_PERMALINK};
pub use object::ObjectQuery;
pub use predicate::{Condition, Field, Operator, SortDirection, SortOrder, Value};
