//! minigram - A minimal grammar toolkit for small embedded DSLs
//!
//! Token kinds are defined as start-anchored regular expressions and rules
//! as token-kind sequences or predicates over token windows. Text is lexed
//! first-match-wins and the token stream is folded into parse entries,
//! recursing into the interior of rules that accept sub-rules.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod error;
pub mod grammar;
pub mod output;

pub use grammar::Grammar;
