//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use linkscan_core::{Automaton, Lexicon};

        println!("Validating lexicon: {}", self.lexicon.display());

        let text = std::fs::read_to_string(&self.lexicon)?;

        // Compile as well: tag collisions between literals only surface
        // during automaton construction, not during list validation.
        let outcome = Lexicon::from_toml_str(&text)
            .and_then(|lexicon| Automaton::compile(&lexicon).map(|a| (lexicon, a)));

        match outcome {
            Ok((lexicon, automaton)) => {
                println!("✓ Lexicon is valid!");
                println!("  Top-level domains: {}", lexicon.tlds.len());
                println!("  Schemes: {}", lexicon.schemes.len());
                println!("  Automaton states: {}", automaton.state_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
