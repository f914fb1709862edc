//! Domain models for minigram
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TokenMatcher`] - a named, start-anchored pattern
//! - [`Token`] - what the lexer emits for each match
//! - [`Rule`] - a named matcher over token windows
//! - [`ParseEntry`] - one resolved rule match, possibly with nested entries
//! - [`GrammarDescription`] - the persistable (tokens-only) form of a grammar

mod description;
mod entry;
mod rule;
mod token;
mod token_matcher;

pub use description::{GrammarDescription, TokenDescription};
pub use entry::{ParseEntry, RuleResult};
pub use rule::{Predicate, Rule, RuleMatch, RuleMatcher, Transform};
pub use token::{Span, Token};
pub use token_matcher::TokenMatcher;
