//! Validate a grammar description

use std::collections::HashSet;
use std::path::Path;

use minigram::adapters::description::FileGrammarStore;
use minigram::core::models::TokenMatcher;
use minigram::core::ports::GrammarStore;
use minigram::error::DuplicateDefinitionError;
use minigram::output::{GrammarCheckResult, OutputMode, TokenInfo};

/// Compile every token of a description and report problems
///
/// Unlike loading for `tokenize`, duplicates are reported rather than skipped.
pub fn check(grammar_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let description = FileGrammarStore::new(grammar_path).load()?;

    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for token in &description.tokens {
        if let Err(err) = TokenMatcher::from_description(token) {
            errors.push(err.to_string());
        }
        if !seen.insert(token.kind.as_str()) {
            errors.push(DuplicateDefinitionError::Token(token.kind.clone()).to_string());
        }
    }

    let result = GrammarCheckResult {
        valid: errors.is_empty(),
        grammar: description.name.clone(),
        tokens: description
            .tokens
            .iter()
            .map(|t| TokenInfo {
                kind: t.kind.clone(),
                pattern: t.pattern.clone(),
            })
            .collect(),
        errors,
    };
    result.render(mode);

    if !result.valid {
        anyhow::bail!("grammar '{}' has {} problem(s)", result.grammar, result.errors.len());
    }
    Ok(())
}
