//! Grammar store port
//!
//! Defines the interface for persisting grammar descriptions.

use crate::core::models::GrammarDescription;
use crate::error::DescriptionError;

/// Persistence for declarative grammar descriptions
///
/// Implementations decide where and in which format descriptions live.
pub trait GrammarStore: Send + Sync {
    /// Load the stored description
    fn load(&self) -> Result<GrammarDescription, DescriptionError>;

    /// Replace the stored description
    fn save(&self, description: &GrammarDescription) -> Result<(), DescriptionError>;
}
