//! Integration tests for the minigram CLI

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn minigram() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("minigram"))
}

const QUERY_TOML: &str = r#"name = "query"

[[tokens]]
kind = "ignored"
pattern = '[\t\n\s]+'

[[tokens]]
kind = "reserved"
pattern = '[{}\[\]()=]'

[[tokens]]
kind = "keyword"
pattern = "(or|and)"

[[tokens]]
kind = "variable"
pattern = "([a-zA-Z][a-zA-Z0-9]*)"
"#;

/// Write a grammar file into a fresh temp dir
fn grammar_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_version() {
    minigram()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("minigram"));
}

#[test]
fn test_no_args_shows_info() {
    minigram().assert().success().stdout(predicate::str::contains("minigram v"));
}

#[test]
fn test_tokenize_prints_tokens() {
    let (_temp, path) = grammar_file("query.toml", QUERY_TOML);

    minigram()
        .args(["tokenize", "--grammar"])
        .arg(&path)
        .arg("a or b")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"))
        .stdout(predicate::str::contains("\"or\""));
}

#[test]
fn test_tokenize_reads_stdin() {
    let (_temp, path) = grammar_file("query.toml", QUERY_TOML);

    let output = minigram()
        .args(["--json", "tokenize", "--grammar"])
        .arg(&path)
        .write_stdin("(x)")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["grammar"], "query");
    assert_eq!(json["tokens"].as_array().unwrap().len(), 3);
    assert_eq!(json["tokens"][1]["entry"], "x");
}

#[test]
fn test_count_json() {
    let (_temp, path) = grammar_file("query.toml", QUERY_TOML);

    let output = minigram()
        .args(["--json", "count", "--grammar"])
        .arg(&path)
        .arg("{ this is {\ta or\t} test }")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 17);
    let counts = json["counts"].as_array().unwrap();
    let count = |name: &str| {
        counts.iter().find(|c| c["name"] == name).map(|c| c["count"].as_u64().unwrap())
    };
    assert_eq!(count("ignored"), Some(8));
    assert_eq!(count("reserved"), Some(4));
    assert_eq!(count("variable"), Some(4));
    assert_eq!(count("keyword"), Some(1));
}

#[test]
fn test_check_accepts_json_description() {
    let (_temp, path) = grammar_file(
        "calc.json",
        r#"{"name": "calc", "tokens": [{"kind": "mult", "pattern": "x"}, {"type": "number", "regex": "[0-9]+"}]}"#,
    );

    minigram()
        .args(["check", "--grammar"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Grammar 'calc' OK: 2 token(s)"));
}

#[test]
fn test_check_reports_problems() {
    let (_temp, path) = grammar_file(
        "bad.toml",
        "name = \"bad\"\n\n[[tokens]]\nkind = \"open\"\npattern = \"(\"\n\n[[tokens]]\nkind = \"open\"\npattern = \"x\"\n",
    );

    minigram()
        .args(["check", "--grammar"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid pattern for token `open`"))
        .stdout(predicate::str::contains("token `open` already registered"));
}

#[test]
fn test_missing_grammar_fails() {
    let temp = TempDir::new().unwrap();

    minigram()
        .args(["tokenize", "--grammar"])
        .arg(temp.path().join("absent.toml"))
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_convert_toml_to_json() {
    let (_temp, path) = grammar_file("query.toml", QUERY_TOML);

    let output = minigram()
        .args(["convert", "--grammar"])
        .arg(&path)
        .args(["--to", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "query");
    assert_eq!(json["tokens"][2]["kind"], "keyword");
    assert_eq!(json["tokens"][0]["pattern"], r"[\t\n\s]+");
}
