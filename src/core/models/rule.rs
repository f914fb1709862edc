//! Rules over token windows
//!
//! A rule matches a window at the head of a token sequence, either by
//! comparing token kinds positionally or by asking a predicate. The
//! smallest accepted window wins.
//!
//! # Examples
//!
//! ```
//! use minigram::core::models::{Rule, Span, Token};
//! use serde_json::json;
//!
//! let rule = Rule::sequence("assign", ["var", "eq", "num"])
//!     .unwrap()
//!     .with_transform(|t| json!({ "name": t[0].entry }));
//!
//! let tokens = vec![
//!     Token::new("var", "x", Span::new(0, 1)),
//!     Token::new("eq", "=", Span::new(2, 3)),
//!     Token::new("num", "1", Span::new(4, 5)),
//! ];
//! let m = rule.test(&tokens).unwrap();
//! assert_eq!(m.len, 3);
//! assert_eq!(m.result.get("name"), Some(&json!("x")));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::error::ConfigurationError;

use super::{RuleResult, Token};

/// Predicate over a candidate window
pub type Predicate = Arc<dyn Fn(&[Token]) -> bool + Send + Sync>;

/// Builds a rule's result from its matched window
pub type Transform = Arc<dyn Fn(&[Token]) -> Value + Send + Sync>;

/// How a rule recognises its window
#[derive(Clone)]
pub enum RuleMatcher {
    /// Exact token kinds, positionally
    Sequence(Vec<String>),
    /// Arbitrary test, tried on growing windows
    Predicate(Predicate),
}

impl std::fmt::Debug for RuleMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence(kinds) => f.debug_tuple("Sequence").field(kinds).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl RuleMatcher {
    /// Length of the smallest window at the head of `tokens` this matcher accepts
    ///
    /// Only the declared length can satisfy a sequence, so no other window
    /// size is tried for it.
    #[must_use]
    pub fn smallest_window(&self, tokens: &[Token]) -> Option<usize> {
        match self {
            Self::Sequence(kinds) => {
                let window = tokens.get(..kinds.len())?;
                window.iter().zip(kinds).all(|(t, k)| t.kind == *k).then_some(kinds.len())
            },
            Self::Predicate(predicate) => (1..=tokens.len()).find(|&n| predicate(&tokens[..n])),
        }
    }
}

/// A successful rule test
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    /// Number of tokens consumed
    pub len: usize,
    /// Transform output or the matched window
    pub result: RuleResult,
}

/// A named matcher with an optional transform
#[derive(Clone)]
pub struct Rule {
    name: String,
    matcher: RuleMatcher,
    transform: Option<Transform>,
    sub_rules: bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("transform", &self.transform.is_some())
            .field("sub_rules", &self.sub_rules)
            .finish()
    }
}

impl Rule {
    /// Create a rule from any matcher
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyName`] for an empty name and
    /// [`ConfigurationError::EmptySequence`] for a sequence with no kinds.
    pub fn new(name: impl Into<String>, matcher: RuleMatcher) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        if matches!(&matcher, RuleMatcher::Sequence(kinds) if kinds.is_empty()) {
            return Err(ConfigurationError::EmptySequence { rule: name });
        }

        Ok(Self {
            name,
            matcher,
            transform: None,
            sub_rules: false,
        })
    }

    /// Create a rule matching token kinds in order
    pub fn sequence<I, S>(name: impl Into<String>, kinds: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, RuleMatcher::Sequence(kinds.into_iter().map(Into::into).collect()))
    }

    /// Create a rule matching the first window the predicate accepts
    pub fn predicate<F>(name: impl Into<String>, predicate: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&[Token]) -> bool + Send + Sync + 'static,
    {
        Self::new(name, RuleMatcher::Predicate(Arc::new(predicate)))
    }

    /// Set the transform applied to matched windows
    #[must_use]
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&[Token]) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Enable or disable re-parsing of the matched window's interior
    #[must_use]
    pub fn accepts_sub_rules(mut self, enabled: bool) -> Self {
        self.sub_rules = enabled;
        self
    }

    /// Shorthand for `accepts_sub_rules(true)`
    #[must_use]
    pub fn sub(self) -> Self {
        self.accepts_sub_rules(true)
    }

    /// Rule name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How this rule recognises windows
    #[must_use]
    pub const fn matcher(&self) -> &RuleMatcher {
        &self.matcher
    }

    /// Whether matched interiors are parsed recursively
    #[must_use]
    pub const fn has_sub_rules(&self) -> bool {
        self.sub_rules
    }

    /// Test against the head of `tokens`
    ///
    /// The transform runs once, on the smallest accepted window.
    #[must_use]
    pub fn test(&self, tokens: &[Token]) -> Option<RuleMatch> {
        let len = self.matcher.smallest_window(tokens)?;
        let window = &tokens[..len];
        let result = self
            .transform
            .as_ref()
            .map_or_else(|| RuleResult::Tokens(window.to_vec()), |t| RuleResult::Value(t(window)));
        Some(RuleMatch { len, result })
    }
}
