//! Chainable object index query.
//!
//! [`ObjectQuery`] is a plain description of an item set: a conjunction of
//! [`Condition`]s plus an optional explicit ordering. Index implementations
//! evaluate it; building one never touches the index.
//!
//! ```
//! use article_search::query::{Field, ObjectQuery, Operator};
//!
//! let query = ObjectQuery::find(["Cms::RadarArticlePage"])
//!     .and(vec![Field::attribute("title")], Operator::Contains, vec!["statins".into()])
//!     .and_not(Field::Display, Operator::Equals, vec!["private".into()]);
//!
//! assert_eq!(query.conditions().len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::query::predicate::{Condition, Field, Operator, SortOrder, Value};

/// A conjunction of conditions over the object index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectQuery {
    conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<SortOrder>,
}

impl ObjectQuery {
    /// A query matching every object.
    pub fn all() -> Self {
        Self::default()
    }

    /// Objects whose content type is one of `content_types`.
    pub fn find<I, S>(content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = content_types
            .into_iter()
            .map(|content_type| Value::Text(content_type.into()))
            .collect();
        Self::all().and(vec![Field::ObjClass], Operator::Equals, values)
    }

    /// Require any of `fields` to match any of `values`.
    pub fn and(mut self, fields: Vec<Field>, operator: Operator, values: Vec<Value>) -> Self {
        self.conditions.push(Condition::new(fields, operator, values));
        self
    }

    /// Like [`and`](Self::and), weighting matches per field for relevance.
    pub fn and_boosted(
        mut self,
        fields: Vec<Field>,
        operator: Operator,
        values: Vec<Value>,
        boosts: Vec<(Field, f32)>,
    ) -> Self {
        self.conditions
            .push(Condition::new(fields, operator, values).with_boosts(boosts));
        self
    }

    /// Exclude objects whose `field` matches any of `values`.
    pub fn and_not(mut self, field: Field, operator: Operator, values: Vec<Value>) -> Self {
        self.conditions.push(Condition::not(field, operator, values));
        self
    }

    /// Replace relevance ordering with an explicit one.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn sort_order(&self) -> Option<&SortOrder> {
        self.order.as_ref()
    }

    /// Whether any condition carries relevance boosts.
    pub fn is_boosted(&self) -> bool {
        self.conditions.iter().any(|c| !c.boosts.is_empty())
    }
}
