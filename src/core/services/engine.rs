//! Rule engine
//!
//! Folds a token sequence into parse entries. Each pass tries every rule,
//! in order, at the current cursor; a rule that matches consumes its
//! smallest accepted window and later rules in the same pass continue from
//! there. A pass in which nothing matched skips one token.
//!
//! Rules that accept sub-rules have the interior of their window (without
//! the first and last token) parsed again with the full rule set.

use log::{debug, trace};

use crate::core::models::{ParseEntry, Rule, Token};

/// Parse `tokens` with `rules`
#[must_use]
pub fn parse(rules: &[Rule], tokens: &[Token]) -> Vec<ParseEntry> {
    let mut entries = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let mut matched = false;

        for rule in rules {
            let Some(rest) = tokens.get(cursor..).filter(|r| !r.is_empty()) else {
                break;
            };
            let Some(found) = rule.test(rest) else {
                continue;
            };

            let window = &rest[..found.len];
            debug!("rule `{}` matched {} token(s) at {cursor}", rule.name(), found.len);

            let mut entry = ParseEntry::new(rule.name(), found.result);
            if rule.has_sub_rules() {
                entry.sub = interior(window).map(|inner| parse(rules, inner));
            }

            entries.push(entry);
            cursor += found.len;
            matched = true;
        }

        if !matched {
            trace!("no rule matches at token {cursor}, skipping {}", tokens[cursor]);
            cursor += 1;
        }
    }

    entries
}

/// Window without its opening and closing token, if anything remains
fn interior(window: &[Token]) -> Option<&[Token]> {
    match window {
        [_, inner @ .., _] if !inner.is_empty() => Some(inner),
        _ => None,
    }
}
