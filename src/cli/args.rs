//! Command line argument parsing for the article-search CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::SearchParams;

/// article-search - scoped article search over a CMS content corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "article-search")]
#[command(about = "Scoped article search, facets and pagination over a CMS content corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ArticleSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ARTICLE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ArticleSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a content corpus
    Search(SearchArgs),

    /// Show the terms a query is matched with
    Terms(TermsArgs),

    /// List the search scopes and their profiles
    Scopes,
}

/// Arguments for searching.
///
/// Options are taken as raw text and coerced the same way web request
/// parameters are: malformed numbers count as 0 and unknown scopes search
/// everything.
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Corpus file (JSON, `{"items": [...]}`)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Scope: radar, australian_prescriber, nps or all
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Offset of the first result
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Sort order; `most-recent` sorts by publication date
    #[arg(long)]
    pub sort: Option<String>,

    /// Only items published within this many months
    #[arg(short, long, allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Content type facet to restrict results to
    #[arg(long)]
    pub category: Option<String>,
}

impl SearchArgs {
    /// The arguments as raw search parameters.
    pub fn to_params(&self) -> SearchParams {
        SearchParams {
            q: Some(self.query.clone()),
            offset: self.offset.clone(),
            scope: self.scope.clone(),
            publication: None,
            sort: self.sort.clone(),
            age: self.age.clone(),
            category: self.category.clone(),
        }
    }
}

/// Arguments for term inspection
#[derive(Parser, Debug, Clone)]
pub struct TermsArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::Scope;
    use crate::search::{SearchRequest, SortMode};

    #[test]
    fn test_verbosity() {
        let args = ArticleSearchArgs::try_parse_from(["article-search", "scopes"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = ArticleSearchArgs::try_parse_from(["article-search", "-vvv", "scopes"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            ArticleSearchArgs::try_parse_from(["article-search", "-v", "-q", "scopes"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ArticleSearchArgs::try_parse_from(["article-search", "-f", "json", "scopes"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_search_args_coerce() {
        let args = ArticleSearchArgs::try_parse_from([
            "article-search",
            "search",
            "corpus.json",
            "anti-biotics",
            "--scope",
            "nps",
            "--offset",
            "-3",
            "--sort",
            "most-recent",
            "--age",
            "12",
        ])
        .unwrap();

        let Command::Search(search_args) = args.command else {
            panic!("Expected search command");
        };
        let request = SearchRequest::from(search_args.to_params());
        assert_eq!(request.query, "anti-biotics");
        assert_eq!(request.scope, Scope::Nps);
        assert_eq!(request.offset, 0);
        assert_eq!(request.sort, SortMode::MostRecent);
        assert_eq!(request.age, 12);
        assert_eq!(request.category, "all");
    }

    #[test]
    fn test_terms_command() {
        let args =
            ArticleSearchArgs::try_parse_from(["article-search", "terms", "beta-blockers"]).unwrap();
        match args.command {
            Command::Terms(terms) => assert_eq!(terms.query, "beta-blockers"),
            _ => panic!("Expected terms command"),
        }
    }
}
