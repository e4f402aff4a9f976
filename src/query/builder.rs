//! Builds the filtered, boosted article query for a search request.

use chrono::{DateTime, Months, Utc};

use crate::analysis::{TermProcessor, TermSet};
use crate::config::SearchConfig;
use crate::query::object::ObjectQuery;
use crate::query::predicate::{Field, Operator, SortOrder, Value};
use crate::scope::{Scope, content_type};
use crate::search::request::SearchRequest;

/// Confirmation page shown after feedback is sent; never a search result.
pub const THANK_YOU_PERMALINK: &str = "contact-us/give-feedback/thank-you";

/// Site-wide feedback form, hidden from Australian Prescriber searches.
pub const FEEDBACK_PERMALINK: &str = "contact-us/give-feedback";

/// Permalink prefix of Australian Prescriber pages.
pub const AUSTRALIAN_PRESCRIBER_PREFIX: &str = "australian-prescriber";

/// `display` value of items hidden from search.
pub const PRIVATE_DISPLAY: &str = "private";

/// The article query for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    pub scope: Scope,
    /// Terms the query matched on; empty when no term filter applies.
    pub terms: TermSet,
    /// Every filter except the category restriction. Facets count this set.
    pub base: ObjectQuery,
    /// Content type facet the results are restricted to.
    pub category: Option<String>,
}

impl ArticleQuery {
    /// The query whose items are counted and paged.
    pub fn filtered(&self) -> ObjectQuery {
        match &self.category {
            Some(category) => self.base.clone().and(
                vec![Field::TypeFacet],
                Operator::Equals,
                vec![Value::from(category)],
            ),
            None => self.base.clone(),
        }
    }
}

/// Turns [`SearchRequest`]s into [`ArticleQuery`]s.
#[derive(Debug, Clone)]
pub struct ArticleQueryBuilder {
    processor: TermProcessor,
    date_field: Field,
}

impl Default for ArticleQueryBuilder {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl ArticleQueryBuilder {
    pub fn new(config: &SearchConfig) -> Self {
        ArticleQueryBuilder {
            processor: TermProcessor::with_synonyms(config.synonyms.clone()),
            date_field: Field::named(config.date_attribute.clone()),
        }
    }

    /// The term processor used for query text.
    pub fn processor(&self) -> &TermProcessor {
        &self.processor
    }

    /// The attribute used for recency ordering and the age filter.
    pub fn date_field(&self) -> &Field {
        &self.date_field
    }

    /// Build the query, resolving the age filter against `now`.
    pub fn build(&self, request: &SearchRequest, now: DateTime<Utc>) -> ArticleQuery {
        let scope = request.scope;
        let profile = scope.profile();
        let terms = self.processor.process(&request.query);
        let filtering_terms = !terms.is_empty();

        let mut query = ObjectQuery::find(profile.content_types.iter().copied());

        if filtering_terms {
            query = query
                .and_boosted(
                    profile.fields.to_vec(),
                    Operator::Contains,
                    terms.iter().map(Value::from).collect(),
                    profile.boosts.to_vec(),
                )
                .and_not(
                    Field::Permalink,
                    Operator::Equals,
                    vec![THANK_YOU_PERMALINK.into()],
                );
        }

        query = query.and_not(Field::Display, Operator::Equals, vec![PRIVATE_DISPLAY.into()]);

        match scope {
            Scope::Radar | Scope::Nps if filtering_terms => {
                query = query.and_not(
                    Field::Permalink,
                    Operator::StartsWith,
                    vec![AUSTRALIAN_PRESCRIBER_PREFIX.into()],
                );
            }
            Scope::AustralianPrescriber => {
                query = query.and_not(
                    Field::Permalink,
                    Operator::Equals,
                    vec![FEEDBACK_PERMALINK.into()],
                );
            }
            _ => {}
        }

        query = query.and_not(
            Field::ObjClass,
            Operator::Equals,
            vec![content_type::AUTHOR.into()],
        );

        if request.is_most_recent() {
            query = query.order(SortOrder::desc(self.date_field.clone()));
        }

        if request.age > 0 {
            let cutoff = now
                .checked_sub_months(Months::new(request.age))
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            query = query.and(
                vec![self.date_field.clone()],
                Operator::IsGreaterThan,
                vec![Value::Date(cutoff)],
            );
        }

        log::debug!(
            "built {} query with {} terms and {} conditions",
            scope,
            terms.len(),
            query.conditions().len()
        );

        ArticleQuery {
            scope,
            terms,
            base: query,
            category: request.category_filter().map(str::to_string),
        }
    }
}
