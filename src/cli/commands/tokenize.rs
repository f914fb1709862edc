//! Print the token stream of some text

use std::path::Path;

use minigram::output::{OutputMode, TokenListResult};

use super::input::{load_grammar, read_text};

/// Tokenize text with a grammar description
pub fn tokenize(grammar_path: &Path, text: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let grammar = load_grammar(grammar_path)?;
    let text = read_text(text)?;

    let result = TokenListResult {
        grammar: grammar.name().to_string(),
        tokens: grammar.tokenize(&text),
    };
    result.render(mode);
    Ok(())
}
