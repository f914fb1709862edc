//! Occurrence counting

use serde::Serialize;

use crate::core::models::Token;

/// How often a key occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    /// The counted key
    pub name: String,
    /// Number of occurrences
    pub count: usize,
}

/// Count items by key, keeping keys in first-seen order
pub fn count_by<T, K, F>(items: &[T], mut key: F) -> Vec<Count>
where
    F: FnMut(&T) -> K,
    K: Into<String>,
{
    let mut counts: Vec<Count> = Vec::new();
    for item in items {
        let name = key(item).into();
        if let Some(existing) = counts.iter_mut().find(|c| c.name == name) {
            existing.count += 1;
        } else {
            counts.push(Count { name, count: 1 });
        }
    }
    counts
}

/// Count tokens per kind
#[must_use]
pub fn count_kinds(tokens: &[Token]) -> Vec<Count> {
    count_by(tokens, |t| t.kind.clone())
}

/// Occurrences of `name` in a count list, zero if absent
#[must_use]
pub fn count_of(counts: &[Count], name: &str) -> usize {
    counts.iter().find(|c| c.name == name).map_or(0, |c| c.count)
}
