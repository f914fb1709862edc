//! Shared loading of grammars and input text

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use minigram::Grammar;
use minigram::adapters::description::FileGrammarStore;
use minigram::core::ports::GrammarStore;

/// Load and compile a grammar description file
pub fn load_grammar(path: &Path) -> anyhow::Result<Grammar> {
    let description = FileGrammarStore::new(path).load()?;
    let grammar = Grammar::from_description(&description)
        .with_context(|| format!("invalid grammar in {}", path.display()))?;
    Ok(grammar)
}

/// Use the given text, or read all of stdin
pub fn read_text(text: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
    Ok(buf)
}
