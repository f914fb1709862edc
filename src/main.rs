//! minigram - Tokenize text with declarative grammars
//!
//! Loads TOML or JSON grammar descriptions and runs their token
//! definitions over text from the command line or stdin.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the minigram CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
