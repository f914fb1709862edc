//! Port traits (interfaces) for the grammar core
//!
//! These traits define the boundaries between the lexer/engine and the
//! things they are handed: token definitions and description storage.
//!
//! Implementations live next to the models (`TokenMatcher`) and in the
//! `adapters` module (file-backed stores).

mod grammar_store;
mod prefix_matcher;

pub use grammar_store::GrammarStore;
pub use prefix_matcher::{PrefixMatch, PrefixMatcher};
