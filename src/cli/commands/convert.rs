//! Re-emit a grammar description

use std::path::Path;

use minigram::Grammar;
use minigram::adapters::description::{DescriptionFormat, FileGrammarStore};
use minigram::core::ports::GrammarStore;

/// Print a description in the requested format
///
/// The description is compiled first so only loadable grammars are emitted.
pub fn convert(grammar_path: &Path, to: DescriptionFormat) -> anyhow::Result<()> {
    let description = FileGrammarStore::new(grammar_path).load()?;
    let grammar = Grammar::from_description(&description)?;
    println!("{}", to.write(&grammar.describe())?);
    Ok(())
}
