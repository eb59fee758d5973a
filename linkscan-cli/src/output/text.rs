//! Plain text output formatter

use super::TokenFormatter;
use anyhow::Result;
use linkscan_core::Token;
use std::io::Write;

/// Plain text formatter - one `KIND<TAB>text` line per token
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: false,
        }
    }

    /// Emit a `# source` header before each document, for multi-file runs
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

/// Escape control characters so every token stays on its own line.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

impl<W: Write> TokenFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, tokens: &[Token<'_>]) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "# {source}")?;
        }
        for token in tokens {
            writeln!(self.writer, "{}\t{}", token.kind, escape(token.text))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
