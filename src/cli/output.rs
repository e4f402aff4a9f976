//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::index::ContentItem;
use crate::query::Field;
use crate::scope::{Scope, ScopeProfile};
use crate::search::{FacetCount, SearchResult};

/// A command result that can also be rendered for people.
pub trait HumanOutput: Serialize {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

/// Write a result in the requested format.
pub fn write_output<T: HumanOutput>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
            Ok(())
        }
    }
}

/// One row of a result page.
#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub id: String,
    pub obj_class: String,
    pub title: Option<String>,
    pub permalink: String,
    pub type_facet: Option<String>,
}

impl ArticleSummary {
    fn new(item: &ContentItem) -> Self {
        ArticleSummary {
            id: item.id.clone(),
            obj_class: item.obj_class.clone(),
            title: item.title().map(|t| t.into_owned()),
            permalink: item.permalink.clone(),
            type_facet: item.type_facet.clone(),
        }
    }
}

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub scope: Scope,
    pub terms: Vec<String>,
    pub total: usize,
    pub page_total: usize,
    pub from: usize,
    pub to: usize,
    pub results: bool,
    pub facets: Vec<FacetCount>,
    pub articles: Vec<ArticleSummary>,
}

impl From<&SearchResult> for SearchOutput {
    fn from(result: &SearchResult) -> Self {
        SearchOutput {
            query: result.request().query.clone(),
            scope: result.scope(),
            terms: result.terms().as_slice().to_vec(),
            total: result.total(),
            page_total: result.page_total(),
            from: result.from(),
            to: result.to(),
            results: result.has_results(),
            facets: result.facets().as_slice().to_vec(),
            articles: result.articles().iter().map(ArticleSummary::new).collect(),
        }
    }
}

impl HumanOutput for SearchOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if !self.results {
            writeln!(out, "No results for '{}' in {}", self.query, self.scope)?;
            return Ok(());
        }

        writeln!(
            out,
            "Results {}-{} of {} for '{}' in {}",
            self.from, self.to, self.total, self.query, self.scope
        )?;
        writeln!(out, "═══════════════")?;
        for (i, article) in self.articles.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} [{}]",
                i + 1,
                article.title.as_deref().unwrap_or(&article.id),
                article.type_facet.as_deref().unwrap_or(&article.obj_class)
            )?;
            if !article.permalink.is_empty() {
                writeln!(out, "     /{}", article.permalink)?;
            }
        }

        if !self.facets.is_empty() {
            writeln!(out)?;
            writeln!(out, "Types:")?;
            for facet in &self.facets {
                writeln!(out, "  {} ({})", facet.value, facet.count)?;
            }
        }
        Ok(())
    }
}

/// Result structure for term inspection.
#[derive(Debug, Serialize)]
pub struct TermsOutput {
    pub query: String,
    pub terms: Vec<String>,
}

impl HumanOutput for TermsOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if self.terms.is_empty() {
            writeln!(out, "No search terms (matches everything in scope)")?;
        }
        for term in &self.terms {
            writeln!(out, "{term}")?;
        }
        Ok(())
    }
}

/// Serializable view of a scope profile.
#[derive(Debug, Serialize)]
pub struct ScopeOutput {
    pub scope: Scope,
    pub content_types: Vec<&'static str>,
    pub fields: Vec<String>,
    pub boosts: Vec<(String, f32)>,
    pub author_lookup: bool,
}

impl From<&ScopeProfile> for ScopeOutput {
    fn from(profile: &ScopeProfile) -> Self {
        ScopeOutput {
            scope: profile.scope,
            content_types: profile.content_types.to_vec(),
            fields: profile.fields.iter().map(Field::to_string).collect(),
            boosts: profile
                .boosts
                .iter()
                .map(|(field, boost)| (field.to_string(), *boost))
                .collect(),
            author_lookup: profile.scope.supports_author_lookup(),
        }
    }
}

/// Result structure for the scope listing.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ScopesOutput(pub Vec<ScopeOutput>);

impl HumanOutput for ScopesOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for scope in &self.0 {
            writeln!(out, "{}", scope.scope)?;
            writeln!(out, "  types:  {}", scope.content_types.join(", "))?;
            writeln!(out, "  fields: {}", scope.fields.join(", "))?;
            let boosts: Vec<String> = scope
                .boosts
                .iter()
                .map(|(field, boost)| format!("{field}^{boost}"))
                .collect();
            writeln!(out, "  boosts: {}", boosts.join(", "))?;
            if scope.author_lookup {
                writeln!(out, "  author cross-reference")?;
            }
        }
        Ok(())
    }
}
