//! Content items as returned by the object index.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::predicate::{Field, Value};

/// A read-only projection of a CMS object.
///
/// Articles, authors and author roles are all content items; they differ by
/// `obj_class`. Relations are expressed through `links`, the ids of the
/// objects an item references: an author role links to its author, an
/// article links to its author roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub obj_class: String,
    #[serde(default)]
    pub permalink: String,
    /// Visibility flag; `"private"` hides the item from search.
    #[serde(default)]
    pub display: String,
    /// Human-readable content type used for faceting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_facet: Option<String>,
    /// Searchable attributes (`title`, `body`, `search_date`, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl ContentItem {
    pub fn new<I: Into<String>, C: Into<String>>(id: I, obj_class: C) -> Self {
        ContentItem {
            id: id.into(),
            obj_class: obj_class.into(),
            permalink: String::new(),
            display: String::new(),
            type_facet: None,
            attributes: BTreeMap::new(),
            links: Vec::new(),
        }
    }

    pub fn with_permalink<S: Into<String>>(mut self, permalink: S) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub fn with_display<S: Into<String>>(mut self, display: S) -> Self {
        self.display = display.into();
        self
    }

    pub fn with_type_facet<S: Into<String>>(mut self, type_facet: S) -> Self {
        self.type_facet = Some(type_facet.into());
        self
    }

    pub fn with_text<K: Into<String>, V: Into<String>>(mut self, name: K, text: V) -> Self {
        self.attributes.insert(name.into(), Value::Text(text.into()));
        self
    }

    pub fn with_date<K: Into<String>>(mut self, name: K, date: DateTime<Utc>) -> Self {
        self.attributes.insert(name.into(), Value::Date(date));
        self
    }

    pub fn with_link<S: Into<String>>(mut self, id: S) -> Self {
        self.links.push(id.into());
        self
    }

    /// Text attribute by name; dates are rendered as RFC 3339.
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.attributes.get(name)? {
            Value::Text(text) => Some(Cow::Borrowed(text)),
            Value::Date(date) => Some(Cow::Owned(date.to_rfc3339())),
        }
    }

    /// Date attribute by name.
    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.attributes.get(name).and_then(Value::as_date)
    }

    pub fn title(&self) -> Option<Cow<'_, str>> {
        self.text("title")
    }

    /// Textual values of a field. [`Field::Any`] yields the permalink and
    /// every text attribute.
    pub fn field_texts(&self, field: &Field) -> Vec<Cow<'_, str>> {
        match field {
            Field::ObjClass => vec![Cow::Borrowed(self.obj_class.as_str())],
            Field::Permalink => vec![Cow::Borrowed(self.permalink.as_str())],
            Field::Display => vec![Cow::Borrowed(self.display.as_str())],
            Field::TypeFacet => self
                .type_facet
                .as_deref()
                .map(Cow::Borrowed)
                .into_iter()
                .collect(),
            Field::Any => std::iter::once(Cow::Borrowed(self.permalink.as_str()))
                .chain(self.attributes.values().filter_map(|value| {
                    value.as_text().map(Cow::Borrowed)
                }))
                .collect(),
            Field::Attribute(name) => self.text(name).into_iter().collect(),
        }
    }

    /// Date value of a field, if it holds one.
    pub fn field_date(&self, field: &Field) -> Option<DateTime<Utc>> {
        match field {
            Field::Attribute(name) => self.date(name),
            _ => None,
        }
    }
}
