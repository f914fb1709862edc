//! Declarative grammar descriptions
//!
//! Only tokens are described. Rules carry code (predicates and transforms)
//! and are never persisted.

use serde::{Deserialize, Serialize};

/// Persistable form of a grammar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDescription {
    /// Grammar name
    pub name: String,
    /// Token definitions in registration order
    #[serde(default)]
    pub tokens: Vec<TokenDescription>,
}

/// Persistable form of a token matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescription {
    /// Token kind
    #[serde(alias = "type")]
    pub kind: String,
    /// Unanchored pattern
    #[serde(alias = "regex")]
    pub pattern: String,
}

impl GrammarDescription {
    /// Create an empty description
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
        }
    }

    /// Append a token definition
    #[must_use]
    pub fn with_token(mut self, kind: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.tokens.push(TokenDescription {
            kind: kind.into(),
            pattern: pattern.into(),
        });
        self
    }

    /// Token kinds in registration order
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.kind.as_str()).collect()
    }
}
