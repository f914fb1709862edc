//! Core grammar logic for minigram
//!
//! This module contains the lexer and rule engine with no I/O dependencies.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (TokenMatcher, Token, Rule, ParseEntry)
//! - `services/` - Lexing, parsing and counting
//! - `ports/` - Trait definitions for matchers and description storage

pub mod models;
pub mod ports;
pub mod services;
