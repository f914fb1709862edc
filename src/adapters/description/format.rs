//! Description encodings
//!
//! TOML is the default. JSON follows the `{name, tokens: [{kind, pattern}]}`
//! layout; `type`/`regex` are accepted as aliases when reading.

use std::path::Path;

use crate::core::models::GrammarDescription;
use crate::error::DescriptionError;

/// Encoding of a grammar description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFormat {
    /// `name = ...` followed by `[[tokens]]` tables
    #[default]
    Toml,
    /// `{"name": ..., "tokens": [...]}`
    Json,
}

impl DescriptionFormat {
    /// Pick a format from a file extension, falling back to TOML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Decode a description
    pub fn parse(self, content: &str) -> Result<GrammarDescription, DescriptionError> {
        Ok(match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }

    /// Encode a description
    pub fn write(self, description: &GrammarDescription) -> Result<String, DescriptionError> {
        Ok(match self {
            Self::Toml => toml::to_string_pretty(description)?,
            Self::Json => serde_json::to_string_pretty(description)?,
        })
    }
}

impl std::fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for DescriptionFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown description format: {s}")),
        }
    }
}
