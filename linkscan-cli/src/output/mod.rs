//! Output formatting module

use anyhow::Result;
use linkscan_core::Token;

/// Trait for token stream formatters
pub trait TokenFormatter {
    /// Format the token stream of one scanned document
    fn format_document(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
