//! Tokenize command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, TextFormatter, TokenFormatter};
use anyhow::Result;
use clap::Args;
use linkscan_core::TokenScanner;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files (reads stdin when none are given)
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Custom lexicon file (TOML) instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One KIND<TAB>text line per token
    Text,
    /// JSON array of documents with their token streams
    Json,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let scanner = self.build_scanner()?;
        log::info!(
            "scanner ready: {} automaton states, {} tlds, {} schemes",
            scanner.automaton().state_count(),
            scanner.lexicon().tlds.len(),
            scanner.lexicon().schemes.len(),
        );

        let documents = self.read_documents()?;
        let writer = self.open_output()?;
        let mut formatter: Box<dyn TokenFormatter> = match self.format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_headers(documents.len() > 1))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (source, content) in &documents {
            let tokens = scanner.tokenize(content);
            log::debug!("{source}: {} bytes -> {} tokens", content.len(), tokens.len());
            formatter.format_document(source, &tokens)?;
        }

        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Build the scanner from the custom lexicon, or the embedded default
    fn build_scanner(&self) -> Result<TokenScanner> {
        match &self.lexicon {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    CliError::FileNotFound(format!("{}: {e}", path.display()))
                })?;
                let scanner = TokenScanner::from_toml_str(&text)
                    .map_err(|e| CliError::InvalidLexicon(e.to_string()))?;
                Ok(scanner)
            }
            None => Ok(TokenScanner::new()),
        }
    }

    /// Read every input into memory, or stdin when no files were given
    fn read_documents(&self) -> Result<Vec<(String, String)>> {
        if self.input.is_empty() {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(vec![("-".to_string(), content)]);
        }

        let mut documents = Vec::with_capacity(self.input.len());
        for path in &self.input {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::FileNotFound(format!("{}: {e}", path.display()))
            })?;
            documents.push((path.display().to_string(), content));
        }
        Ok(documents)
    }

    /// Open the output destination
    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = fs::File::create(path).map_err(|e| {
                    CliError::OutputError(format!("{}: {e}", path.display()))
                })?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn args() -> TokenizeArgs {
        TokenizeArgs {
            input: vec![],
            output: None,
            format: OutputFormat::Text,
            lexicon: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_build_scanner_default() {
        let scanner = args().build_scanner().unwrap();
        assert!(scanner.lexicon().tlds.iter().any(|t| t == "com"));
    }

    #[test]
    fn test_build_scanner_custom_lexicon() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "tlds = [\"lan\"]\n\n[[schemes]]\nname = \"demo\"\n"
        )
        .unwrap();

        let mut args = args();
        args.lexicon = Some(file.path().to_path_buf());

        let scanner = args.build_scanner().unwrap();
        assert_eq!(scanner.lexicon().tlds, vec!["lan"]);
    }

    #[test]
    fn test_build_scanner_rejects_bad_lexicon() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "tlds = []\nschemes = []").unwrap();

        let mut args = args();
        args.lexicon = Some(file.path().to_path_buf());

        assert!(args.build_scanner().is_err());
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let mut args = args();
        args.input = vec![PathBuf::from("/definitely/not/here.txt")];
        assert!(args.read_documents().is_err());
    }
}
