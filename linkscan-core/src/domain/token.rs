//! Token taxonomy: the closed set of lexical categories the scanner emits.

use serde::Serialize;
use std::fmt;

/// Lexical category of a scanned token.
///
/// The set is closed: downstream consumers pattern-match on these variants
/// to assemble higher-level entities (URLs, email addresses) and rely on no
/// category ever being added silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Word-like run of alphanumerics with interior hyphens, a candidate
    /// domain label.
    Domain,
    /// Digits only.
    Num,
    /// A recognized top-level domain.
    Tld,
    /// A recognized protocol scheme including its delimiting colon
    /// (`http:`); the bare scheme word without the colon stays [`Domain`].
    Scheme,
    /// The literal "localhost".
    Localhost,
    /// One maximal run of non-newline whitespace.
    Ws,
    /// A single `\n`, never merged with horizontal whitespace.
    Nl,
    /// `@`
    At,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `#`
    Pound,
    /// `?`
    Query,
    /// `/`
    Slash,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// Shared class for `,` `;` `!` `"` `'`.
    Punctuation,
    /// Catch-all for any single character nothing else claims.
    Sym,
}

impl TokenKind {
    /// Construct a token of this category from its matched text.
    pub fn token(self, text: &str) -> Token<'_> {
        Token { kind: self, text }
    }

    /// Stable lowercase name, identical to the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Domain => "domain",
            TokenKind::Num => "num",
            TokenKind::Tld => "tld",
            TokenKind::Scheme => "scheme",
            TokenKind::Localhost => "localhost",
            TokenKind::Ws => "ws",
            TokenKind::Nl => "nl",
            TokenKind::At => "at",
            TokenKind::Colon => "colon",
            TokenKind::Dot => "dot",
            TokenKind::Plus => "plus",
            TokenKind::Pound => "pound",
            TokenKind::Query => "query",
            TokenKind::Slash => "slash",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenBrace => "open_brace",
            TokenKind::CloseBrace => "close_brace",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Sym => "sym",
        }
    }

    /// Every category, in declaration order.
    pub const fn all() -> &'static [TokenKind] {
        &[
            TokenKind::Domain,
            TokenKind::Num,
            TokenKind::Tld,
            TokenKind::Scheme,
            TokenKind::Localhost,
            TokenKind::Ws,
            TokenKind::Nl,
            TokenKind::At,
            TokenKind::Colon,
            TokenKind::Dot,
            TokenKind::Plus,
            TokenKind::Pound,
            TokenKind::Query,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::Punctuation,
            TokenKind::Sym,
        ]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed token: a category plus the exact original-case substring it
/// matched. Tokens borrow the scanned input and are owned by the caller;
/// the scanner retains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// Lexical category.
    pub kind: TokenKind,
    /// Matched text, original casing preserved.
    pub text: &'a str,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
