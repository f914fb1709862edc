//! Tokenizing and rule matching
//!
//! - [`tokenize`] - first-match-wins lexer
//! - [`parse`] - smallest-window rule engine with sub-rule recursion
//! - [`count_by`] - occurrence counting over tokens or results

mod count;
mod engine;
mod lexer;

pub use count::{Count, count_by, count_kinds, count_of};
pub use engine::parse;
pub use lexer::tokenize;
