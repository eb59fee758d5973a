//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use linkscan_core::TokenKind;

pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text files or stdin into the typed token stream
    Tokenize(tokenize::TokenizeArgs),

    /// Validate a lexicon file without scanning anything
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List every token category the scanner can emit
    Kinds,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Kinds => {
                for kind in TokenKind::all() {
                    println!("{kind}");
                }
            }
            ListCommands::Formats => {
                println!("text");
                println!("json");
            }
        }
        Ok(())
    }
}
