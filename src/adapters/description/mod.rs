//! Grammar description files
//!
//! Implements `GrammarStore` using TOML or JSON files.
//!
//! - [`format`] - Decode and encode descriptions in either format
//! - [`store`] - `GrammarStore` implementation backed by a single file

pub mod format;
pub mod store;

pub use format::DescriptionFormat;
pub use store::FileGrammarStore;
