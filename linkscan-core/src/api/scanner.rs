//! Main token scanner implementation

use crate::api::{Error, Result};
use crate::domain::automaton::Automaton;
use crate::domain::lexicon::{default_lexicon, Lexicon};
use crate::domain::scanner;
use crate::domain::token::Token;

/// Token scanner with a clean construction-then-scan API.
///
/// Building compiles the lexicon into an immutable automaton; scanning is
/// read-only afterwards, so one scanner can serve any number of threads
/// concurrently. Scanners built from different lexicons are fully
/// independent; there is no process-wide singleton.
#[derive(Debug)]
pub struct TokenScanner {
    automaton: Automaton,
    lexicon: Lexicon,
}

impl TokenScanner {
    /// Create a scanner from the embedded default lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(default_lexicon().clone())
            .expect("default lexicon should always compile")
    }

    /// Create a scanner from a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        let automaton = Automaton::compile(&lexicon).map_err(Error::InvalidLexicon)?;
        Ok(Self { automaton, lexicon })
    }

    /// Create a scanner from a lexicon TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::with_lexicon(Lexicon::from_toml_str(text)?)
    }

    /// Tokenize `text` into a gap-free sequence of typed tokens.
    ///
    /// Tokens borrow from `text`; concatenating their texts in order
    /// reproduces the input exactly. Never fails, for any input.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        scanner::tokenize(&self.automaton, text)
    }

    /// The lexicon this scanner was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The compiled automaton, mainly useful for diagnostics.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::new()
    }
}
