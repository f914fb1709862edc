//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use minigram::adapters::description::DescriptionFormat;
use minigram::output::OutputMode;

/// minigram - Tokenize text with declarative grammars
#[derive(Parser, Debug)]
#[command(
    name = "minigram",
    version,
    about = "Tokenize text with declarative grammars",
    long_about = "Load a grammar description (TOML or JSON) and run its tokens over text.\n\n\
                  Token kinds are regular expressions anchored at the current position.\n\
                  The first kind that matches wins; unmatched characters are skipped."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of some text
    Tokenize {
        /// Grammar description file
        #[arg(short, long)]
        grammar: PathBuf,

        /// Text to tokenize (reads stdin when omitted)
        text: Option<String>,
    },

    /// Count tokens per kind
    Count {
        /// Grammar description file
        #[arg(short, long)]
        grammar: PathBuf,

        /// Text to tokenize (reads stdin when omitted)
        text: Option<String>,
    },

    /// Validate a grammar description
    Check {
        /// Grammar description file
        #[arg(short, long)]
        grammar: PathBuf,
    },

    /// Re-emit a grammar description in another format
    Convert {
        /// Grammar description file
        #[arg(short, long)]
        grammar: PathBuf,

        /// Target format: toml or json
        #[arg(short, long, default_value = "json")]
        to: DescriptionFormat,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Tokenize { grammar, text }) => {
            commands::tokenize(&grammar, text.as_deref(), output_mode)
        },
        Some(Command::Count { grammar, text }) => commands::count(&grammar, text.as_deref(), output_mode),
        Some(Command::Check { grammar }) => commands::check(&grammar, output_mode),
        Some(Command::Convert { grammar, to }) => commands::convert(&grammar, to),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("minigram v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("minigram v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'minigram --help' for usage");
                println!("Run 'minigram check --grammar <file>' to validate a grammar");
            }
            Ok(())
        },
    }
}
