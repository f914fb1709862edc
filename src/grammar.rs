//! Named grammars
//!
//! A [`Grammar`] owns an ordered set of token matchers and rules and runs
//! the lexer and rule engine over input text.
//!
//! # Examples
//!
//! ```
//! use minigram::Grammar;
//! use minigram::core::models::Rule;
//! use serde_json::json;
//!
//! let mut grammar = Grammar::new("assign");
//! grammar.define_token("eq", "=").unwrap();
//! grammar.define_token("var", "[a-zA-Z][a-zA-Z0-9]*").unwrap();
//! grammar.define_token("num", "[0-9]+").unwrap();
//! grammar
//!     .define_rule(
//!         Rule::sequence("equality", ["var", "eq", "num"])
//!             .map(|r| r.with_transform(|t| json!({ "var_name": t[0].entry }))),
//!     )
//!     .unwrap();
//!
//! let parsed = grammar.parse("chicken = 56");
//! assert_eq!(parsed.len(), 1);
//! assert_eq!(parsed[0].result.get("var_name"), Some(&json!("chicken")));
//! ```

use log::warn;

use crate::core::models::{GrammarDescription, ParseEntry, Rule, Token, TokenMatcher};
use crate::core::services::{parse, tokenize};
use crate::error::{ConfigurationError, DuplicateDefinitionError, GrammarError};

/// Token matchers and rules bound to a name
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    name: String,
    tokens: Vec<TokenMatcher>,
    rules: Vec<Rule>,
}

impl Grammar {
    /// Create an empty grammar
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Grammar name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token matchers in registration order
    #[must_use]
    pub fn tokens(&self) -> &[TokenMatcher] {
        &self.tokens
    }

    /// Rules in priority order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Register a token matcher
    ///
    /// A kind that is already registered is rejected and the original
    /// matcher stays in effect.
    pub fn add_token(&mut self, matcher: TokenMatcher) -> Result<(), DuplicateDefinitionError> {
        if self.tokens.iter().any(|t| t.kind() == matcher.kind()) {
            return Err(DuplicateDefinitionError::Token(matcher.kind().to_string()));
        }
        self.tokens.push(matcher);
        Ok(())
    }

    /// Compile and register a token matcher
    pub fn define_token(&mut self, kind: &str, pattern: &str) -> Result<(), GrammarError> {
        self.add_token(TokenMatcher::new(kind, pattern)?)?;
        Ok(())
    }

    /// Register a rule
    ///
    /// A name that is already registered is rejected and the original rule
    /// stays in effect.
    pub fn add_rule(&mut self, rule: Rule) -> Result<(), DuplicateDefinitionError> {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(DuplicateDefinitionError::Rule(rule.name().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Register the outcome of a rule constructor
    pub fn define_rule(&mut self, rule: Result<Rule, ConfigurationError>) -> Result<(), GrammarError> {
        self.add_rule(rule?)?;
        Ok(())
    }

    /// Tokenize `input` with this grammar's matchers
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        tokenize(&self.tokens, input)
    }

    /// Tokenize and parse `input`
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<ParseEntry> {
        parse(&self.rules, &self.tokenize(input))
    }

    /// Declarative form of this grammar's tokens
    #[must_use]
    pub fn describe(&self) -> GrammarDescription {
        GrammarDescription {
            name: self.name.clone(),
            tokens: self.tokens.iter().map(TokenMatcher::describe).collect(),
        }
    }

    /// Build a grammar from a description
    ///
    /// Duplicate kinds are skipped with a warning; invalid patterns fail.
    pub fn from_description(description: &GrammarDescription) -> Result<Self, ConfigurationError> {
        let mut grammar = Self::new(description.name.clone());
        for token in &description.tokens {
            if let Err(err) = grammar.add_token(TokenMatcher::from_description(token)?) {
                warn!("grammar `{}`: {err}", description.name);
            }
        }
        Ok(grammar)
    }
}
