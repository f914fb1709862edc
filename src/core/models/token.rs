//! Token types produced by the lexer

use serde::{Deserialize, Serialize};

/// A span in the lexed input (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains another
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A token emitted by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind of the matcher that produced this token
    pub kind: String,
    /// The matched text
    pub entry: String,
    /// Full match (index 0) followed by the pattern's capture groups
    #[serde(default)]
    pub captures: Vec<Option<String>>,
    /// Position in the input
    pub span: Span,
}

impl Token {
    /// Create a token without capture groups
    #[must_use]
    pub fn new(kind: impl Into<String>, entry: impl Into<String>, span: Span) -> Self {
        let entry = entry.into();
        Self {
            kind: kind.into(),
            captures: vec![Some(entry.clone())],
            entry,
            span,
        }
    }

    /// Attach capture groups (index 0 is the whole match)
    #[must_use]
    pub fn with_captures(mut self, captures: Vec<Option<String>>) -> Self {
        self.captures = captures;
        self
    }

    /// Check the token kind
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Get a capture group by index (0 is the whole match)
    #[must_use]
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).and_then(Option::as_deref)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})@{}..{}", self.kind, self.entry, self.span.start, self.span.end)
    }
}
