//! Integration tests for the command line front end.

use std::io::Write;

use article_search::cli::{ArticleSearchArgs, execute_command_to};
use clap::Parser;
use serde_json::Value;
use tempfile::NamedTempFile;

const CORPUS: &str = r#"{
  "items": [
    {"id": "r1", "obj_class": "Cms::RadarArticlePage", "permalink": "radar/statins",
     "type_facet": "Radar",
     "attributes": {"title": "Statins in the elderly", "search_date": "2023-02-01T00:00:00Z"}},
    {"id": "m1", "obj_class": "Cms::MedicinePage", "permalink": "medicines/atorvastatin",
     "type_facet": "Medicine",
     "attributes": {"title": "Atorvastatin", "keywords": "statins"}},
    {"id": "m2", "obj_class": "Cms::MedicinePage", "permalink": "medicines/hidden",
     "display": "private", "type_facet": "Medicine",
     "attributes": {"title": "Statins draft"}}
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> String {
    let args = ArticleSearchArgs::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    execute_command_to(&args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_search_json_output() {
    let corpus = write_temp(CORPUS);
    let path = corpus.path().to_str().unwrap();

    let output = run(&["article-search", "-f", "json", "search", path, "statins"]);
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 2);
    assert_eq!(json["results"], true);
    assert_eq!(json["scope"], "all");
    assert_eq!(json["terms"], serde_json::json!(["statins"]));
    let ids: Vec<&str> = json["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["r1", "m1"]);
}

#[test]
fn test_search_scope_and_human_output() {
    let corpus = write_temp(CORPUS);
    let path = corpus.path().to_str().unwrap();

    let output = run(&["article-search", "search", path, "statins", "--scope", "nps"]);
    assert!(output.contains("Results 1-1 of 1"));
    assert!(output.contains("Atorvastatin [Medicine]"));
    assert!(!output.contains("Statins draft"));

    let output = run(&["article-search", "search", path, "insulin"]);
    assert!(output.contains("No results for 'insulin'"));
}

#[test]
fn test_terms_uses_config_synonyms() {
    let config = write_temp(r#"{"synonyms": {"statins": ["hmg-coa reductase inhibitors"]}}"#);
    let config_path = config.path().to_str().unwrap();

    let output = run(&[
        "article-search",
        "--config",
        config_path,
        "-f",
        "json",
        "terms",
        "statins",
    ]);
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        json["terms"],
        serde_json::json!(["statins", "hmg-coa reductase inhibitors"])
    );
}

#[test]
fn test_invalid_config_is_an_error() {
    let config = write_temp(r#"{"facet_limit": 0}"#);
    let args = ArticleSearchArgs::try_parse_from([
        "article-search",
        "--config",
        config.path().to_str().unwrap(),
        "scopes",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = execute_command_to(&args, &mut out).unwrap_err();
    assert!(err.to_string().contains("facet_limit"));
}

#[test]
fn test_missing_corpus_is_an_error() {
    let args = ArticleSearchArgs::try_parse_from([
        "article-search",
        "search",
        "/nonexistent/corpus.json",
        "statins",
    ])
    .unwrap();
    let mut out = Vec::new();
    assert!(execute_command_to(&args, &mut out).is_err());
}

#[test]
fn test_scopes_json() {
    let output = run(&["article-search", "-f", "json", "scopes"]);
    let json: Value = serde_json::from_str(&output).unwrap();
    let scopes = json.as_array().unwrap();
    assert_eq!(scopes.len(), 4);
    assert_eq!(scopes[1]["scope"], "australian_prescriber");
    assert_eq!(scopes[1]["author_lookup"], true);
    assert_eq!(scopes[2]["boosts"][1], serde_json::json!(["brand_name", 10.0]));
}
