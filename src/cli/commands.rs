//! Command implementations for the article-search CLI.

use std::io::{self, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::MemoryIndex;
use crate::scope::Scope;
use crate::search::{ArticleSearcher, SearchRequest};

/// Execute a CLI command.
pub fn execute_command(args: ArticleSearchArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing its output to `out`.
pub fn execute_command_to(args: &ArticleSearchArgs, out: &mut dyn Write) -> Result<()> {
    let config = load_config(args)?;
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args, config, args, out),
        Command::Terms(terms_args) => show_terms(terms_args, config, args, out),
        Command::Scopes => list_scopes(args, out),
    }
}

fn load_config(args: &ArticleSearchArgs) -> Result<SearchConfig> {
    match &args.config {
        Some(path) => SearchConfig::from_file(path),
        None => Ok(SearchConfig::default()),
    }
}

/// Search a corpus file.
fn search_corpus(
    search_args: &SearchArgs,
    config: SearchConfig,
    cli_args: &ArticleSearchArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let index = MemoryIndex::from_json_file(&search_args.corpus)?;
    let searcher = ArticleSearcher::new(index, config)?;
    let request = SearchRequest::from(search_args.to_params());

    let start_time = Instant::now();
    let result = searcher.search(&request)?;
    log::info!(
        "search finished in {} ms",
        start_time.elapsed().as_millis()
    );

    write_output(
        &SearchOutput::from(&result),
        cli_args.output_format,
        cli_args.pretty,
        out,
    )
}

/// Show the term set for a query.
fn show_terms(
    terms_args: &TermsArgs,
    config: SearchConfig,
    cli_args: &ArticleSearchArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let searcher = ArticleSearcher::new(MemoryIndex::new(), config)?;
    let output = TermsOutput {
        query: terms_args.query.clone(),
        terms: searcher.terms(&terms_args.query).into_vec(),
    };
    write_output(&output, cli_args.output_format, cli_args.pretty, out)
}

/// List every scope profile.
fn list_scopes(cli_args: &ArticleSearchArgs, out: &mut dyn Write) -> Result<()> {
    let output = ScopesOutput(Scope::ALL.iter().map(|s| s.profile().into()).collect());
    write_output(&output, cli_args.output_format, cli_args.pretty, out)
}
