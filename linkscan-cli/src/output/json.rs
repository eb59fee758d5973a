//! JSON output formatter

use super::TokenFormatter;
use anyhow::Result;
use linkscan_core::Token;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers documents and emits one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for one scanned document in JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Where the text came from ("-" for stdin)
    pub source: String,
    /// The emitted token stream, in order
    pub tokens: Vec<TokenData>,
}

/// Data structure for one token in JSON output
#[derive(Debug, Serialize)]
pub struct TokenData {
    /// Token category name
    pub kind: &'static str,
    /// Matched text, original casing preserved
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> TokenFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            tokens: tokens
                .iter()
                .map(|token| TokenData {
                    kind: token.kind.name(),
                    text: token.text.to_string(),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
