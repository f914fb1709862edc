//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `description/` - TOML and JSON grammar description files

pub mod description;
