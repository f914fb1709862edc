//! Integration tests for minigram
//!
//! These tests exercise the `minigram` binary end to end against grammar
//! description files on disk.

mod cli_test;
