use crate::domain::token::TokenKind;
use thiserror::Error;

/// Errors raised while building an automaton from a lexicon.
///
/// All of these are construction-time programming or configuration errors;
/// a successfully built automaton never errors while scanning.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A literal list in the lexicon was empty.
    #[error("lexicon {list} list is empty")]
    EmptyList {
        /// Which list was empty ("tld" or "scheme").
        list: &'static str,
    },

    /// A literal had a shape the automaton cannot represent.
    #[error("invalid {list} literal {literal:?}: {reason}")]
    InvalidLiteral {
        /// Which list the literal came from.
        list: &'static str,
        /// The offending literal as supplied.
        literal: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Two literals require different keyword categories at the same state.
    #[error(
        "literal {word:?} collides with an existing keyword: \
         state already accepts {existing} but {requested} was requested"
    )]
    LiteralCollision {
        /// The literal whose insertion detected the collision.
        word: String,
        /// Category already carried by the shared state.
        existing: TokenKind,
        /// Category the new literal asked for.
        requested: TokenKind,
    },

    /// The same character was wired to two different successor states.
    #[error("conflicting transition on {ch:?}")]
    ConflictingTransition {
        /// The doubly-mapped character.
        ch: char,
    },

    /// A lexicon document failed to parse.
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),
}
