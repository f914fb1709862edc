//! Lexer
//!
//! Tries every matcher, in the order given, against the head of the
//! remaining input. The first matcher to match wins, even if a later one
//! would match more text. Characters no matcher accepts are dropped.

use log::trace;

use crate::core::models::{Span, Token};
use crate::core::ports::{PrefixMatch, PrefixMatcher};

/// Split `input` into tokens
///
/// Zero-length matches count as no match, so every step consumes at least
/// one character.
#[must_use]
pub fn tokenize<M: PrefixMatcher>(matchers: &[M], input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let rest = &input[cursor..];

        if let Some((kind, found)) = first_match(matchers, rest) {
            let span = Span::new(cursor, cursor + found.len());
            cursor = span.end;
            tokens.push(Token {
                kind: kind.to_string(),
                entry: found.text,
                captures: found.captures,
                span,
            });
        } else {
            let skipped = rest.chars().next().map_or(1, char::len_utf8);
            trace!("no token matches at byte {cursor}, skipping {:?}", &rest[..skipped]);
            cursor += skipped;
        }
    }

    tokens
}

fn first_match<'m, M: PrefixMatcher>(matchers: &'m [M], rest: &str) -> Option<(&'m str, PrefixMatch)> {
    matchers.iter().find_map(|m| {
        m.match_prefix(rest)
            .filter(|found| !found.is_empty())
            .map(|found| (m.kind(), found))
    })
}
