//! Regex-backed token definitions
//!
//! A [`TokenMatcher`] names a token kind and the pattern that recognises it.
//! The pattern is anchored to the start of the input when compiled, so
//! `[0-9]+` only ever matches digits at the head of the remaining text.
//!
//! # Examples
//!
//! ```
//! use minigram::core::models::TokenMatcher;
//! use minigram::core::ports::PrefixMatcher;
//!
//! let num = TokenMatcher::new("num", "[0-9]+").unwrap();
//! assert_eq!(num.match_prefix("42 apples").unwrap().text, "42");
//! assert!(num.match_prefix("apples 42").is_none());
//! ```

use regex::Regex;

use crate::core::ports::{PrefixMatch, PrefixMatcher};
use crate::error::ConfigurationError;

use super::TokenDescription;

/// A named token kind and its compiled, start-anchored pattern
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    kind: String,
    /// Pattern as written by the grammar author
    pattern: String,
    /// Anchored compilation of `pattern`
    regex: Regex,
}

impl PartialEq for TokenMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.pattern == other.pattern
    }
}

impl Eq for TokenMatcher {}

impl TokenMatcher {
    /// Compile a token definition
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyName`] for an empty kind and
    /// [`ConfigurationError::InvalidPattern`] when the pattern does not compile.
    pub fn new(kind: impl Into<String>, pattern: impl Into<String>) -> Result<Self, ConfigurationError> {
        let kind = kind.into();
        let pattern = pattern.into();
        if kind.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }

        // \A rather than ^ so multi-line flags in the pattern can't unanchor it
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
            ConfigurationError::InvalidPattern {
                kind: kind.clone(),
                source,
            }
        })?;

        Ok(Self {
            kind,
            pattern,
            regex,
        })
    }

    /// The token kind
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The unanchored pattern as defined
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Declarative form of this matcher
    #[must_use]
    pub fn describe(&self) -> TokenDescription {
        TokenDescription {
            kind: self.kind.clone(),
            pattern: self.pattern.clone(),
        }
    }

    /// Rebuild a matcher from its declarative form
    pub fn from_description(description: &TokenDescription) -> Result<Self, ConfigurationError> {
        Self::new(description.kind.clone(), description.pattern.clone())
    }
}

impl PrefixMatcher for TokenMatcher {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn match_prefix(&self, input: &str) -> Option<PrefixMatch> {
        let caps = self.regex.captures(input)?;
        let whole = caps.get(0)?;
        Some(PrefixMatch {
            text: whole.as_str().to_string(),
            captures: caps.iter().map(|c| c.map(|m| m.as_str().to_string())).collect(),
        })
    }
}
