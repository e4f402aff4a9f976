//! Building blocks of object index queries.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An attribute of a content item that a condition can test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The object class (content type).
    ObjClass,
    /// The item's URL path.
    Permalink,
    /// Visibility flag.
    Display,
    /// Facet label for the content type.
    TypeFacet,
    /// Every text attribute at once (or every link, for `links_to`).
    Any,
    /// A named attribute such as `title` or `search_date`.
    Attribute(Cow<'static, str>),
}

impl Field {
    /// A named attribute, usable in constant tables.
    pub const fn attribute(name: &'static str) -> Field {
        Field::Attribute(Cow::Borrowed(name))
    }

    /// A named attribute from a runtime string.
    pub fn named<S: Into<String>>(name: S) -> Field {
        Field::Attribute(Cow::Owned(name.into()))
    }

    /// Name as used by the index.
    pub fn name(&self) -> &str {
        match self {
            Field::ObjClass => "_obj_class",
            Field::Permalink => "_permalink",
            Field::Display => "display",
            Field::TypeFacet => "type_facet",
            Field::Any => "*",
            Field::Attribute(name) => name,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison applied between a field and the condition's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Exact, case-sensitive equality.
    Equals,
    /// Full-text containment: every word of the value occurs in the field.
    Contains,
    /// Prefix match.
    StartsWith,
    /// Strictly later date.
    IsGreaterThan,
    /// The item references one of the given object ids.
    LinksTo,
}

/// A value compared against a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Date(DateTime<Utc>),
    Text(String),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(date) => Some(*date),
            Value::Text(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

/// One predicate of an [`ObjectQuery`](super::ObjectQuery).
///
/// A condition holds when any of its fields matches any of its values; a
/// negated condition removes the items it would otherwise select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub fields: Vec<Field>,
    pub operator: Operator,
    pub values: Vec<Value>,
    /// Per-field relevance weights; only meaningful for positive conditions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boosts: Vec<(Field, f32)>,
    #[serde(default)]
    pub negated: bool,
}

impl Condition {
    /// A positive condition.
    pub fn new(fields: Vec<Field>, operator: Operator, values: Vec<Value>) -> Self {
        Condition {
            fields,
            operator,
            values,
            boosts: Vec::new(),
            negated: false,
        }
    }

    /// A negated condition on a single field.
    pub fn not(field: Field, operator: Operator, values: Vec<Value>) -> Self {
        Condition {
            fields: vec![field],
            operator,
            values,
            boosts: Vec::new(),
            negated: true,
        }
    }

    /// Attach per-field boosts.
    pub fn with_boosts(mut self, boosts: Vec<(Field, f32)>) -> Self {
        self.boosts = boosts;
        self
    }

    /// Weight of a field within this condition; unlisted fields weigh 1.
    pub fn boost_for(&self, field: &Field) -> f32 {
        self.boosts
            .iter()
            .find(|(boosted, _)| boosted == field)
            .map_or(1.0, |(_, boost)| *boost)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Explicit ordering; without one the index returns relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn desc(field: Field) -> Self {
        SortOrder {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn asc(field: Field) -> Self {
        SortOrder {
            field,
            direction: SortDirection::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::ObjClass.name(), "_obj_class");
        assert_eq!(Field::Permalink.to_string(), "_permalink");
        assert_eq!(Field::attribute("title").name(), "title");
        assert_eq!(Field::named("title"), Field::attribute("title"));
    }

    #[test]
    fn test_boost_for_defaults_to_one() {
        let condition = Condition::new(
            vec![Field::attribute("title"), Field::attribute("body")],
            Operator::Contains,
            vec!["asthma".into()],
        )
        .with_boosts(vec![(Field::attribute("title"), 10.0)]);

        assert_eq!(condition.boost_for(&Field::attribute("title")), 10.0);
        assert_eq!(condition.boost_for(&Field::attribute("body")), 1.0);
        assert!(!condition.negated);
    }

    #[test]
    fn test_value_accessors() {
        let text = Value::from("asthma");
        assert_eq!(text.as_text(), Some("asthma"));
        assert!(text.as_date().is_none());

        let date = Value::from(Utc::now());
        assert!(date.as_date().is_some());
        assert!(date.as_text().is_none());
    }
}
