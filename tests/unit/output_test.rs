//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use minigram::core::models::{Span, Token};
use minigram::core::services::Count;
use minigram::output::{CountResult, GrammarCheckResult, OutputMode, TokenInfo, TokenListResult};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn token_list_serialization() {
    let result = TokenListResult {
        grammar: "calc".to_string(),
        tokens: vec![Token::new("number", "34", Span::new(0, 2))],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"grammar\":\"calc\""));
    assert!(json.contains("\"kind\":\"number\""));
    assert!(json.contains("\"span\":{\"start\":0,\"end\":2}"));
}

#[test]
fn count_serialization() {
    let result = CountResult {
        grammar: "calc".to_string(),
        total: 3,
        counts: vec![
            Count { name: "number".to_string(), count: 2 },
            Count { name: "mult".to_string(), count: 1 },
        ],
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["counts"][0]["name"], "number");
    assert_eq!(json["counts"][1]["count"], 1);
}

#[test]
fn check_result_omits_empty_errors() {
    let result = GrammarCheckResult {
        valid: true,
        grammar: "g".to_string(),
        tokens: vec![TokenInfo { kind: "eq".to_string(), pattern: "=".to_string() }],
        errors: vec![],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"valid\":true"));
    assert!(!json.contains("errors"));
}
