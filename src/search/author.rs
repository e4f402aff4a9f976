//! Author cross-reference.
//!
//! Australian Prescriber articles are credited through author roles: an
//! author role links to an author, an article links to its author roles.
//! A query naming an author should find that author's articles even when
//! the name appears nowhere in the article text, so the query text is
//! matched against authors and the articles reached through their roles
//! join the result set.

use crate::error::Result;
use crate::index::{ContentItem, ObjectIndex};
use crate::query::builder::{FEEDBACK_PERMALINK, PRIVATE_DISPLAY, THANK_YOU_PERMALINK};
use crate::query::{Field, ObjectQuery, Operator, Value};
use crate::scope::content_type;
use crate::search::facet::Facets;
use crate::search::result::HITS_PER_PAGE;

/// Items reached through matching authors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorMatches {
    /// Number of linked items.
    pub total: usize,
    /// Content type counts of the linked items.
    pub facets: Facets,
    /// First page of linked items.
    pub items: Vec<ContentItem>,
}

impl AuthorMatches {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Find the items credited to authors matching `query_text`.
///
/// The raw query text is used, not the derived term set. Returns empty
/// matches when no author, or no role of a matching author, exists.
pub fn cross_reference<I>(index: &I, query_text: &str, facet_limit: usize) -> Result<AuthorMatches>
where
    I: ObjectIndex + ?Sized,
{
    let query_text = query_text.trim();
    if query_text.is_empty() {
        return Ok(AuthorMatches::default());
    }

    let authors = ObjectQuery::find([content_type::AUTHOR]).and(
        vec![Field::Any],
        Operator::Contains,
        vec![Value::from(query_text)],
    );
    if index.count(&authors)? == 0 {
        return Ok(AuthorMatches::default());
    }
    let author_ids = ids(index.fetch_all(&authors)?);
    log::debug!("{} authors match the query", author_ids.len());

    let roles = ObjectQuery::find([content_type::AUTHOR_ROLE]).and(
        vec![Field::Any],
        Operator::LinksTo,
        author_ids,
    );
    let role_ids = ids(index.fetch_all(&roles)?);
    if role_ids.is_empty() {
        return Ok(AuthorMatches::default());
    }

    let linked = linked_items(role_ids);
    let total = index.count(&linked)?;
    if total == 0 {
        return Ok(AuthorMatches::default());
    }

    Ok(AuthorMatches {
        total,
        facets: index.facet(&linked, &Field::TypeFacet, facet_limit)?,
        items: index.page(&linked, HITS_PER_PAGE, 0)?,
    })
}

/// Visible items linking to any of the given author roles.
fn linked_items(role_ids: Vec<Value>) -> ObjectQuery {
    ObjectQuery::all()
        .and(vec![Field::Any], Operator::LinksTo, role_ids)
        .and_not(Field::Display, Operator::Equals, vec![PRIVATE_DISPLAY.into()])
        .and_not(
            Field::Permalink,
            Operator::Equals,
            vec![FEEDBACK_PERMALINK.into(), THANK_YOU_PERMALINK.into()],
        )
        .and_not(
            Field::ObjClass,
            Operator::Equals,
            vec![content_type::AUTHOR.into(), content_type::AUTHOR_ROLE.into()],
        )
}

fn ids(items: Vec<ContentItem>) -> Vec<Value> {
    items.into_iter().map(|item| Value::Text(item.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryIndex;

    fn corpus() -> MemoryIndex {
        MemoryIndex::with_items(vec![
            ContentItem::new("author-smith", content_type::AUTHOR).with_text("name", "Jane Smith"),
            ContentItem::new("author-jones", content_type::AUTHOR).with_text("name", "Ann Jones"),
            ContentItem::new("role-smith", content_type::AUTHOR_ROLE).with_link("author-smith"),
            ContentItem::new("a1", content_type::AP_ARTICLE_PAGE)
                .with_type_facet("Article")
                .with_link("role-smith"),
            ContentItem::new("a2", content_type::AP_ARTICLE_PAGE)
                .with_type_facet("Article")
                .with_link("role-smith"),
            ContentItem::new("a3", content_type::AP_GENERIC_PAGE)
                .with_type_facet("Editorial")
                .with_link("role-smith"),
            ContentItem::new("a4", content_type::AP_ARTICLE_PAGE)
                .with_type_facet("Article")
                .with_display("private")
                .with_link("role-smith"),
        ])
    }

    #[test]
    fn test_matching_author_contributes_linked_items() {
        let matches = cross_reference(&corpus(), "Smith", 50).unwrap();
        assert_eq!(matches.total, 3);
        assert_eq!(matches.facets.count("Article"), 2);
        assert_eq!(matches.facets.count("Editorial"), 1);
        let ids: Vec<&str> = matches.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
    }

    #[test]
    fn test_author_without_roles() {
        let matches = cross_reference(&corpus(), "Jones", 50).unwrap();
        assert!(matches.is_empty());
        assert!(matches.facets.is_empty());
    }

    #[test]
    fn test_no_author_or_blank_query() {
        assert!(cross_reference(&corpus(), "Nobody", 50).unwrap().is_empty());
        assert!(cross_reference(&corpus(), "  ", 50).unwrap().is_empty());
    }
}
