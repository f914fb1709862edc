//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::Token;
use crate::core::services::Count;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a tokenize operation
#[derive(Debug, Serialize)]
pub struct TokenListResult {
    /// Grammar used
    pub grammar: String,
    /// Tokens in input order
    pub tokens: Vec<Token>,
}

/// Result of a count operation
#[derive(Debug, Serialize)]
pub struct CountResult {
    /// Grammar used
    pub grammar: String,
    /// Total number of tokens
    pub total: usize,
    /// Per-kind counts in first-seen order
    pub counts: Vec<Count>,
}

/// Result of checking a grammar description
#[derive(Debug, Serialize)]
pub struct GrammarCheckResult {
    /// Whether every token compiled
    pub valid: bool,
    /// Grammar name
    pub grammar: String,
    /// Token kinds in registration order
    pub tokens: Vec<TokenInfo>,
    /// Problems found, if any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// A token definition as reported by `check`
#[derive(Debug, Serialize)]
pub struct TokenInfo {
    /// Token kind
    pub kind: String,
    /// Pattern as written
    pub pattern: String,
}

impl TokenListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.tokens.is_empty() {
            println!("No tokens.");
            return;
        }

        let width = self.tokens.iter().map(|t| t.kind.len()).max().unwrap_or(0);
        for token in &self.tokens {
            println!(
                "{:>5}..{:<5} {:<width$} {:?}",
                token.span.start, token.span.end, token.kind, token.entry
            );
        }
    }
}

impl CountResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} token(s)", self.total);
        for c in &self.counts {
            println!("  {:<16} {}", c.name, c.count);
        }
    }
}

impl GrammarCheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("Grammar '{}' OK: {} token(s)", self.grammar, self.tokens.len());
            for t in &self.tokens {
                println!("  {:<16} {}", t.kind, t.pattern);
            }
        } else {
            println!("Grammar '{}' is invalid:", self.grammar);
            for e in &self.errors {
                println!("  {e}");
            }
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
