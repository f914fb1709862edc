//! Property-based tests for the lexer
//!
//! Uses proptest to verify properties that should hold for all inputs.

use minigram::core::services::tokenize;
use proptest::prelude::*;

use crate::common::{matchers, query_matchers};

proptest! {
    /// Token spans are ordered, disjoint and hold their own text
    #[test]
    fn spans_are_ordered_and_exact(input in "[a-z0-9 {}=()!?]{0,40}") {
        let tokens = tokenize(&query_matchers(), &input);
        let mut cursor = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= cursor);
            prop_assert!(token.span.end > token.span.start);
            prop_assert_eq!(&input[token.span.start..token.span.end], token.entry.as_str());
            cursor = token.span.end;
        }
    }

    /// Gaps between tokens are single characters no matcher accepts
    #[test]
    fn gaps_are_single_skipped_characters(input in "[a-z0-9 !?#]{0,40}") {
        let m = matchers(&[("word", "[a-z]+"), ("num", "[0-9]+"), ("ws", " +")]);
        let tokens = tokenize(&m, &input);
        let covered: usize = tokens.iter().map(|t| t.entry.len()).sum();
        let skipped = input.chars().filter(|c| matches!(c, '!' | '?' | '#')).count();
        prop_assert_eq!(covered + skipped, input.len());
    }

    /// The earlier of two matching definitions always wins
    #[test]
    fn first_definition_wins(word in "[a-z]{1,10}") {
        let m = matchers(&[("first", "[a-z]+"), ("second", "[a-z]+")]);
        let tokens = tokenize(&m, &word);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind.as_str(), "first");
    }

    /// Tokenizing is deterministic
    #[test]
    fn tokenize_is_repeatable(input in ".{0,30}") {
        let m = query_matchers();
        prop_assert_eq!(tokenize(&m, &input), tokenize(&m, &input));
    }
}
