//! Count tokens per kind

use std::path::Path;

use minigram::core::services::count_kinds;
use minigram::output::{CountResult, OutputMode};

use super::input::{load_grammar, read_text};

/// Tokenize text and count each kind
pub fn count(grammar_path: &Path, text: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let grammar = load_grammar(grammar_path)?;
    let text = read_text(text)?;
    let tokens = grammar.tokenize(&text);

    let result = CountResult {
        grammar: grammar.name().to_string(),
        total: tokens.len(),
        counts: count_kinds(&tokens),
    };
    result.render(mode);
    Ok(())
}
