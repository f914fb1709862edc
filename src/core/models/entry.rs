//! Parse results

use serde::Serialize;
use serde_json::Value;

use super::Token;

/// What a matched rule produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleResult {
    /// Raw matched window (rule has no transform)
    Tokens(Vec<Token>),
    /// Transform output
    Value(Value),
}

impl RuleResult {
    /// Transform output, if any
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Tokens(_) => None,
        }
    }

    /// Matched tokens, if the rule had no transform
    #[must_use]
    pub fn as_tokens(&self) -> Option<&[Token]> {
        match self {
            Self::Tokens(t) => Some(t),
            Self::Value(_) => None,
        }
    }

    /// Look up a field of a transform's object output
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_value().and_then(|v| v.get(field))
    }
}

/// One resolved rule match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseEntry {
    /// Name of the rule that matched
    pub rule: String,
    /// Transform output or matched tokens
    pub result: RuleResult,
    /// Entries parsed from the window interior, for rules accepting sub-rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<Vec<Self>>,
}

impl ParseEntry {
    /// Create an entry with no nested results
    #[must_use]
    pub fn new(rule: impl Into<String>, result: RuleResult) -> Self {
        Self {
            rule: rule.into(),
            result,
            sub: None,
        }
    }

    /// Nested entries, empty when none were parsed
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.sub.as_deref().unwrap_or_default()
    }

    /// Number of entries in this subtree, including itself
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self.children().iter().map(Self::subtree_size).sum::<usize>()
    }
}
