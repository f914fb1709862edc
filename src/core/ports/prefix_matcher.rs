//! Prefix matcher port
//!
//! Defines the capability the lexer needs from a token definition.

/// Result of matching the head of the remaining input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    /// The matched text
    pub text: String,
    /// Whole match followed by capture groups
    pub captures: Vec<Option<String>>,
}

impl PrefixMatch {
    /// Byte length of the matched text
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the match consumed nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Something that recognises a named token kind at the start of a string
///
/// Implementations are only ever asked about the head of the input; they
/// must not search past its first character.
pub trait PrefixMatcher: Send + Sync {
    /// The token kind emitted on a match
    fn kind(&self) -> &str;

    /// Match against the start of `input`
    fn match_prefix(&self, input: &str) -> Option<PrefixMatch>;
}
