//! Literal keyword lists that parameterize the automaton.
//!
//! A [`Lexicon`] is pure data: the top-level domains and protocol schemes
//! the scanner should recognize as keywords. It is consumed exactly once,
//! at automaton construction time. The literal "localhost" is always
//! recognized and is not part of the configurable lists.

mod loader;

pub use loader::default_lexicon;

use crate::domain::error::BuildError;
use serde::{Deserialize, Serialize};

/// The literal keyword lists used to build a scanner automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Recognized top-level domains.
    pub tlds: Vec<String>,
    /// Recognized protocol schemes.
    pub schemes: Vec<SchemeSpec>,
}

/// One protocol scheme entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeSpec {
    /// Scheme name without the delimiting colon (`http`, `mailto`).
    pub name: String,
    /// Whether the scheme also exists with a trailing `s` (`http` ->
    /// `https`).
    #[serde(default)]
    pub secure: bool,
}

impl SchemeSpec {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }
}

impl Lexicon {
    /// Create a lexicon builder.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Parse and validate a lexicon from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, BuildError> {
        let lexicon: Lexicon = toml::from_str(text)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Check the lists for shapes the automaton cannot represent.
    ///
    /// Misconfiguration fails here, at construction time, instead of
    /// surfacing as silent mis-tokenization later. Literal case is
    /// irrelevant; matching is case-insensitive throughout.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.tlds.is_empty() {
            return Err(BuildError::EmptyList { list: "tld" });
        }
        if self.schemes.is_empty() {
            return Err(BuildError::EmptyList { list: "scheme" });
        }

        for tld in &self.tlds {
            validate_tld(tld)?;
        }
        for scheme in &self.schemes {
            validate_scheme(&scheme.name)?;
        }

        Ok(())
    }
}

fn validate_tld(literal: &str) -> Result<(), BuildError> {
    let invalid = |reason| BuildError::InvalidLiteral {
        list: "tld",
        literal: literal.to_string(),
        reason,
    };

    if literal.is_empty() {
        return Err(invalid("literal is empty"));
    }
    if !literal
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid("only ASCII alphanumerics and hyphens are allowed"));
    }
    // Hyphens are interior-only, same as in a domain label.
    if literal.starts_with('-') || literal.ends_with('-') {
        return Err(invalid("leading or trailing hyphen"));
    }
    Ok(())
}

fn validate_scheme(literal: &str) -> Result<(), BuildError> {
    let invalid = |reason| BuildError::InvalidLiteral {
        list: "scheme",
        literal: literal.to_string(),
        reason,
    };

    let mut chars = literal.chars();
    match chars.next() {
        None => return Err(invalid("literal is empty")),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(invalid("scheme must start with an ASCII letter"));
        }
        Some(_) => {}
    }
    // RFC 3986 scheme alphabet.
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return Err(invalid(
            "only ASCII alphanumerics, '+', '-' and '.' are allowed",
        ));
    }
    // The literal's final state is a valid token end; a token must never
    // end right after '+', '-' or '.'.
    if literal.ends_with(['+', '-', '.']) {
        return Err(invalid("scheme must end with an ASCII alphanumeric"));
    }
    Ok(())
}

/// Fluent builder for a [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    tlds: Vec<String>,
    schemes: Vec<SchemeSpec>,
}

impl LexiconBuilder {
    /// Create a new lexicon builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one top-level domain.
    pub fn tld(mut self, tld: impl Into<String>) -> Self {
        self.tlds.push(tld.into());
        self
    }

    /// Add several top-level domains.
    pub fn tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tlds.extend(tlds.into_iter().map(Into::into));
        self
    }

    /// Add one protocol scheme.
    pub fn scheme(mut self, name: impl Into<String>, secure: bool) -> Self {
        self.schemes.push(SchemeSpec::new(name, secure));
        self
    }

    /// Build and validate the lexicon.
    pub fn build(self) -> Result<Lexicon, BuildError> {
        let lexicon = Lexicon {
            tlds: self.tlds,
            schemes: self.schemes,
        };
        lexicon.validate()?;
        Ok(lexicon)
    }
}
