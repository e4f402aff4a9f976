//! In-memory object index.
//!
//! Evaluates [`ObjectQuery`]s by scanning every item. Matching follows the
//! CMS index closely enough for search logic to be exercised end to end:
//!
//! - `equals` is exact and case-sensitive;
//! - `contains` is case-insensitive; a value matches a field when every
//!   whitespace-separated word of the value occurs in the field's text;
//! - `starts_with` is a case-sensitive prefix test;
//! - `is_greater_than` compares dates strictly;
//! - `links_to` tests the item's outgoing links.
//!
//! Without an explicit order, items are ranked by relevance: for each
//! boosted condition an item scores the boost of every field that matched.
//! Ties keep insertion order.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ArticleSearchError, Result};
use crate::index::ObjectIndex;
use crate::index::item::ContentItem;
use crate::query::object::ObjectQuery;
use crate::query::predicate::{Condition, Field, Operator, SortDirection, Value};
use crate::search::facet::Facets;

/// JSON corpus file layout.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub items: Vec<ContentItem>,
}

/// An [`ObjectIndex`] over items held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    items: Vec<ContentItem>,
}

impl MemoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index over the given items.
    pub fn with_items(items: Vec<ContentItem>) -> Self {
        MemoryIndex { items }
    }

    /// Read a JSON corpus (`{"items": [...]}`).
    ///
    /// Every item must have a non-blank id that is unique in the corpus.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let corpus: Corpus = serde_json::from_reader(reader)?;
        let mut index = Self::new();
        for item in corpus.items {
            index.add(item)?;
        }
        Ok(index)
    }

    /// Read a JSON corpus file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let index = Self::from_reader(BufReader::new(file))?;
        log::info!("loaded {} items from {}", index.len(), path.display());
        Ok(index)
    }

    /// Add an item, rejecting blank or already indexed ids.
    pub fn add(&mut self, item: ContentItem) -> Result<()> {
        if item.id.trim().is_empty() {
            return Err(ArticleSearchError::invalid_argument(format!(
                "item of class {} has no id",
                item.obj_class
            )));
        }
        if self.get(&item.id).is_some() {
            return Err(ArticleSearchError::invalid_argument(format!(
                "duplicate item id: {}",
                item.id
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Matching items in query order.
    fn evaluate(&self, query: &ObjectQuery) -> Vec<&ContentItem> {
        let mut scored: Vec<(f32, &ContentItem)> = self
            .items
            .par_iter()
            .filter_map(|item| score(item, query).map(|score| (score, item)))
            .collect();

        match query.sort_order() {
            Some(order) => {
                scored.sort_by(|(_, a), (_, b)| {
                    compare_dates(a.field_date(&order.field), b.field_date(&order.field), order.direction)
                });
            }
            None if query.is_boosted() => {
                scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
            }
            None => {}
        }

        scored.into_iter().map(|(_, item)| item).collect()
    }
}

impl ObjectIndex for MemoryIndex {
    fn count(&self, query: &ObjectQuery) -> Result<usize> {
        Ok(self
            .items
            .par_iter()
            .filter(|item| score(item, query).is_some())
            .count())
    }

    fn page(&self, query: &ObjectQuery, size: usize, offset: usize) -> Result<Vec<ContentItem>> {
        Ok(self
            .evaluate(query)
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect())
    }

    fn facet(&self, query: &ObjectQuery, field: &Field, limit: usize) -> Result<Facets> {
        let matches = self.evaluate(query);
        let values = matches
            .iter()
            .flat_map(|item| item.field_texts(field))
            .collect::<Vec<_>>();
        Ok(Facets::tally(values.iter().map(|value| &**value), limit))
    }
}

/// Relevance score of an item, `None` when it does not match.
fn score(item: &ContentItem, query: &ObjectQuery) -> Option<f32> {
    let mut total = 0.0;
    for condition in query.conditions() {
        let matched = condition_score(item, condition);
        if condition.negated {
            if matched.is_some() {
                return None;
            }
        } else {
            total += matched?;
        }
    }
    Some(total)
}

/// Boost-weighted score of a condition ignoring negation, `None` when no
/// field matches.
fn condition_score(item: &ContentItem, condition: &Condition) -> Option<f32> {
    if condition.operator == Operator::LinksTo {
        let linked = condition
            .values
            .iter()
            .filter_map(Value::as_text)
            .any(|id| item.links.iter().any(|link| link == id));
        return linked.then_some(1.0);
    }

    let mut total = 0.0;
    let mut matched = false;
    for field in &condition.fields {
        if field_matches(item, field, condition.operator, &condition.values) {
            matched = true;
            if !condition.boosts.is_empty() {
                total += condition.boost_for(field);
            }
        }
    }
    matched.then_some(total)
}

fn field_matches(item: &ContentItem, field: &Field, operator: Operator, values: &[Value]) -> bool {
    if operator == Operator::IsGreaterThan {
        let Some(date) = item.field_date(field) else {
            return false;
        };
        return values
            .iter()
            .filter_map(Value::as_date)
            .any(|threshold| date > threshold);
    }

    let texts = item.field_texts(field);
    values.iter().filter_map(Value::as_text).any(|value| {
        texts.iter().any(|text| match operator {
            Operator::Equals => text == value,
            Operator::StartsWith => text.starts_with(value),
            Operator::Contains => contains_words(text, value),
            Operator::IsGreaterThan | Operator::LinksTo => false,
        })
    })
}

fn contains_words(text: &str, value: &str) -> bool {
    let text = text.to_lowercase();
    let mut words = value.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(|word| text.contains(&word.to_lowercase()))
}

/// Dated items first in the requested direction; undated items last.
fn compare_dates(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(&b),
            SortDirection::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
