//! Error types for grammar definition and persistence
//!
//! Definition errors are raised when tokens and rules are constructed or
//! registered. Matching itself never fails: unmatched input is skipped.

use std::path::PathBuf;

use thiserror::Error;

/// A token matcher or rule was constructed with invalid input
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Token kind or rule name was empty
    #[error("definition name must not be empty")]
    EmptyName,

    /// Token pattern failed to compile
    #[error("invalid pattern for token `{kind}`: {source}")]
    InvalidPattern {
        /// Kind of the offending token
        kind: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Fixed-sequence rule declared no token kinds
    #[error("rule `{rule}` has an empty token sequence")]
    EmptySequence {
        /// Name of the offending rule
        rule: String,
    },
}

/// A definition was registered twice; the first registration stands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuplicateDefinitionError {
    /// Token kind already registered
    #[error("token `{0}` already registered")]
    Token(String),

    /// Rule name already registered
    #[error("rule `{0}` already registered")]
    Rule(String),
}

/// Either failure from a `define_*` convenience call
#[derive(Debug, Error)]
pub enum GrammarError {
    /// Invalid definition
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Duplicate definition
    #[error(transparent)]
    Duplicate(#[from] DuplicateDefinitionError),
}

/// Failure loading or saving a declarative grammar description
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// Reading or writing the description file failed
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML description could not be parsed
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML description could not be written
    #[error("toml write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON description could not be parsed or written
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token in the description is invalid
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
