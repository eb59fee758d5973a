//! Finite-automaton token scanner for link detection in free-form text.
//!
//! This crate is the lowest layer of a text-link-detection stack: it
//! recognizes lexical structure — candidate domain labels, recognized
//! top-level domains, protocol schemes, whitespace runs, structural
//! symbols — and emits a gap-free sequence of typed tokens. A downstream
//! component (not part of this crate) groups those tokens into URLs or
//! email addresses.
//!
//! # Architecture
//!
//! - **Domain layer**: the token taxonomy, the index-addressed state
//!   graph, the builder that compiles literal keyword lists into it, and
//!   the longest-match scanning loop.
//! - **API layer**: [`TokenScanner`], a thin facade pairing a compiled
//!   automaton with the lexicon it came from.
//!
//! The automaton is built exactly once per lexicon and is immutable
//! afterwards, so a single scanner can serve concurrent scans from any
//! number of threads without locking.
//!
//! # Example
//!
//! ```rust
//! use linkscan_core::{TokenKind, TokenScanner};
//!
//! let scanner = TokenScanner::new();
//! let tokens = scanner.tokenize("Email test@gmail.com now");
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Domain,
//!         TokenKind::Ws,
//!         TokenKind::Domain,
//!         TokenKind::At,
//!         TokenKind::Domain,
//!         TokenKind::Dot,
//!         TokenKind::Tld,
//!         TokenKind::Ws,
//!         TokenKind::Domain,
//!     ]
//! );
//!
//! // Token texts tile the input exactly, original casing preserved.
//! let rebuilt: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(rebuilt, "Email test@gmail.com now");
//! ```

pub mod api;
pub mod domain;

pub use api::{Error, Result, TokenScanner};
pub use domain::automaton::Automaton;
pub use domain::error::BuildError;
pub use domain::lexicon::{default_lexicon, Lexicon, LexiconBuilder, SchemeSpec};
pub use domain::scanner::tokenize;
pub use domain::token::{Token, TokenKind};
