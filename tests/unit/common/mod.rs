//! Shared test fixtures and helpers
//!
//! Grammars used across the unit tests, built the way an embedding
//! application would build them.

use minigram::Grammar;
use minigram::core::models::{Rule, Token, TokenMatcher};
use serde_json::json;

/// Compile `(kind, pattern)` pairs into matchers, in order
pub fn matchers(defs: &[(&str, &str)]) -> Vec<TokenMatcher> {
    defs.iter()
        .map(|(kind, pattern)| TokenMatcher::new(*kind, *pattern).unwrap())
        .collect()
}

/// Token kinds in order
pub fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

/// Matchers for a tiny boolean query language
///
/// Whitespace is listed first so it is always claimed as `ignored`.
pub fn query_matchers() -> Vec<TokenMatcher> {
    matchers(&[
        ("ignored", r"[\t\n\s]+"),
        ("reserved", r"[{}\[\]()=]"),
        ("keyword", "(or|and)"),
        ("variable", "([a-zA-Z][a-zA-Z0-9]*)"),
    ])
}

/// `var = num` assignments
pub fn assignment_grammar() -> Grammar {
    let mut grammar = Grammar::new("assignment");
    grammar.define_token("eq", "=").unwrap();
    grammar.define_token("var", "([a-zA-Z][a-zA-Z0-9]*)").unwrap();
    grammar.define_token("num", "[0-9]+").unwrap();
    grammar
        .define_rule(Rule::sequence("equality", ["var", "eq", "num"]).map(|r| {
            r.with_transform(|t| {
                json!({
                    "var_name": t[0].entry,
                    "op": t[1].entry,
                    "num": t[2].entry.parse::<i64>().unwrap_or_default(),
                })
            })
        }))
        .unwrap();
    grammar
}

/// `a x b` products; `/` has no token and is skipped
pub fn product_grammar() -> Grammar {
    let mut grammar = Grammar::new("product");
    grammar.define_token("mult", "x").unwrap();
    grammar.define_token("number", "[0-9]+").unwrap();
    grammar
        .define_rule(Rule::sequence("equality", ["number", "mult", "number"]).map(|r| {
            r.with_transform(|t| {
                let a: f64 = t[0].entry.parse().unwrap_or_default();
                let b: f64 = t[2].entry.parse().unwrap_or_default();
                json!({ "num1": a, "op": t[1].entry, "num2": b, "val": a * b })
            })
        }))
        .unwrap();
    grammar
}

/// True once the window holds one balanced `{ ... }` group starting at its head
pub fn balanced_braces(tokens: &[Token]) -> bool {
    let mut open = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token.entry.as_str() {
            "{" => open += 1,
            "}" if open == 0 => return false,
            "}" => open -= 1,
            _ if i == 0 => return false,
            _ => {},
        }
        if open == 0 {
            return i + 1 == tokens.len();
        }
    }
    false
}

/// Nested `{ text }` blocks
pub fn block_grammar() -> Grammar {
    let mut grammar = Grammar::new("blocks");
    grammar.define_token("block", r"(\{|\})").unwrap();
    grammar.define_token("text", r"[a-zA-Z0-9][a-zA-Z0-9\s]*").unwrap();
    grammar
        .define_rule(
            Rule::predicate("text-block", balanced_braces)
                .map(|r| r.with_transform(|_| json!({})).sub()),
        )
        .unwrap();
    grammar
        .define_rule(
            Rule::sequence("text", ["text"]).map(|r| r.with_transform(|t| json!({ "text": t[0].entry }))),
        )
        .unwrap();
    grammar
}
