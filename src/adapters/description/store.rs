//! File-backed grammar store

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::GrammarDescription;
use crate::core::ports::GrammarStore;
use crate::error::DescriptionError;

use super::DescriptionFormat;

/// Grammar store backed by one TOML or JSON file
#[derive(Debug, Clone)]
pub struct FileGrammarStore {
    path: PathBuf,
    format: DescriptionFormat,
}

impl FileGrammarStore {
    /// Create a store, inferring the format from the extension
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DescriptionFormat::from_path(&path);
        Self { path, format }
    }

    /// Override the inferred format
    #[must_use]
    pub fn with_format(mut self, format: DescriptionFormat) -> Self {
        self.format = format;
        self
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoding used for the backing file
    #[must_use]
    pub const fn format(&self) -> DescriptionFormat {
        self.format
    }
}

impl GrammarStore for FileGrammarStore {
    fn load(&self) -> Result<GrammarDescription, DescriptionError> {
        debug!("loading {} grammar from {}", self.format, self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|source| DescriptionError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.format.parse(&content)
    }

    fn save(&self, description: &GrammarDescription) -> Result<(), DescriptionError> {
        let content = self.format.write(description)?;
        fs::write(&self.path, content).map_err(|source| DescriptionError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
