//! Query text analysis.
//!
//! Turns the raw text a visitor typed into the set of terms matched against
//! the searchable fields of a scope:
//!
//! - [`terms`] - hyphen derivation, stopword/short-token filtering and the
//!   final de-duplicated [`TermSet`](terms::TermSet)
//! - [`stop`] - the fixed English stopword list
//! - [`synonym`] - optional synonym expansion

pub mod stop;
pub mod synonym;
pub mod terms;

// Re-export commonly used types
pub use synonym::SynonymDictionary;
pub use terms::{TermProcessor, TermSet, derived_terms, processed_terms};
