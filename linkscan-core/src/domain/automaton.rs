//! Automaton construction: literal keyword tries plus generic fallback
//! edges, frozen into an immutable, index-addressed state graph.
//!
//! Construction happens exactly once per lexicon. The resulting
//! [`Automaton`] holds no interior mutability, so it can be shared across
//! any number of concurrent scans without locking.

use crate::domain::error::BuildError;
use crate::domain::lexicon::Lexicon;
use crate::domain::state::{State, StateId};
use crate::domain::token::TokenKind;

/// Single-character structural symbols, one hop from the start state.
const SYMBOL_EDGES: &[(char, TokenKind)] = &[
    ('@', TokenKind::At),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    ('+', TokenKind::Plus),
    ('#', TokenKind::Pound),
    ('?', TokenKind::Query),
    ('/', TokenKind::Slash),
    ('(', TokenKind::OpenParen),
    (')', TokenKind::CloseParen),
    ('[', TokenKind::OpenBracket),
    (']', TokenKind::CloseBracket),
    ('{', TokenKind::OpenBrace),
    ('}', TokenKind::CloseBrace),
];

/// Characters sharing the punctuation category.
const PUNCTUATION_CHARS: &[char] = &[',', ';', '!', '"', '\''];

/// Every Unicode `White_Space` character except `\n`, which is structural
/// and always tokenizes on its own.
const NON_NEWLINE_WHITESPACE: &[char] = &[
    '\t', '\u{b}', '\u{c}', '\r', ' ', '\u{85}', '\u{a0}', '\u{1680}', '\u{2000}', '\u{2001}',
    '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}',
    '\u{2009}', '\u{200a}', '\u{2028}', '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}',
];

fn ascii_alnum() -> impl Iterator<Item = char> {
    ('a'..='z').chain('0'..='9')
}

/// The frozen scanner automaton: a state table and a start state.
///
/// All lookups are read-only; the type is `Send + Sync` by construction.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
}

impl Automaton {
    /// Build an automaton from a lexicon.
    ///
    /// The lexicon is validated first, so misconfiguration fails here
    /// rather than producing a degenerate automaton discovered only while
    /// scanning.
    pub fn compile(lexicon: &Lexicon) -> Result<Self, BuildError> {
        lexicon.validate()?;
        Builder::default().assemble(lexicon)
    }

    /// The designated start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Successor of `state` on `ch`: explicit edge first, else the state's
    /// default edge. `ch` must be lowercased by the caller.
    pub fn next(&self, state: StateId, ch: char) -> Option<StateId> {
        self.states[state as usize].next(ch)
    }

    /// Accept tag of `state`, if it is a valid stopping point.
    pub fn accept(&self, state: StateId) -> Option<TokenKind> {
        self.states[state as usize].accept()
    }

    /// Number of states in the graph.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

/// Result of one literal insertion.
struct InsertedLiteral {
    /// Final state of the word, created or reused.
    last: StateId,
    /// States newly created along the path, in walk order.
    created: Vec<StateId>,
}

#[derive(Debug, Default)]
struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn add_state(&mut self, accept: Option<TokenKind>) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(match accept {
            Some(kind) => State::accepting(kind),
            None => State::default(),
        });
        id
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id as usize]
    }

    /// Walk `word` from `from`, reusing existing transitions for shared
    /// prefixes and creating states for the rest. Newly created non-final
    /// states are tagged `intermediate`, so a partial keyword match still
    /// ends on a valid generic token; the final state is tagged `tail`.
    ///
    /// States reached through a non-alphanumeric character (the hyphens of
    /// a punycode TLD, a scheme's `+`/`.`) stay untagged: a token must not
    /// end right after such a character, so the scan backtracks past it
    /// exactly as it does at the shared hyphen state.
    fn insert_literal(
        &mut self,
        word: &str,
        from: StateId,
        tail: TokenKind,
        intermediate: TokenKind,
    ) -> Result<InsertedLiteral, BuildError> {
        let mut created = Vec::new();
        let mut cursor = from;
        let len = word.chars().count();

        for (i, ch) in word.chars().enumerate() {
            cursor = match self.states[cursor as usize].edge(ch) {
                Some(existing) => existing,
                None => {
                    let accept = (i + 1 < len && ch.is_ascii_alphanumeric())
                        .then_some(intermediate);
                    let id = self.add_state(accept);
                    self.state_mut(cursor).link(ch, id)?;
                    created.push(id);
                    id
                }
            };
        }

        self.set_tail_tag(cursor, tail, word)?;
        Ok(InsertedLiteral { last: cursor, created })
    }

    /// Tag the final state of a literal, independent of insertion order:
    /// a keyword tag replaces the generic domain tag, never the other way
    /// around, and two different keyword tags on one state are an error.
    fn set_tail_tag(
        &mut self,
        id: StateId,
        tag: TokenKind,
        word: &str,
    ) -> Result<(), BuildError> {
        let state = self.state_mut(id);
        match state.accept() {
            None => state.set_accept(Some(tag)),
            Some(existing) if existing == tag => {}
            Some(TokenKind::Domain) => state.set_accept(Some(tag)),
            Some(_) if tag == TokenKind::Domain => {}
            Some(existing) => {
                return Err(BuildError::LiteralCollision {
                    word: word.to_string(),
                    existing,
                    requested: tag,
                });
            }
        }
        Ok(())
    }

    /// Generic continuation edges: any unclaimed alphanumeric stays in
    /// domain-label territory, a hyphen moves to the hyphen state.
    fn wire_domain_fallback(&mut self, id: StateId, domain: StateId, hyphen: StateId) {
        let state = self.state_mut(id);
        for ch in ascii_alnum() {
            state.link_missing(ch, domain);
        }
        state.link_missing('-', hyphen);
    }

    fn assemble(mut self, lexicon: &Lexicon) -> Result<Automaton, BuildError> {
        let start = self.add_state(None);
        let domain = self.add_state(Some(TokenKind::Domain));
        let num = self.add_state(Some(TokenKind::Num));
        // No accept tag: a token may never end on a bare trailing hyphen,
        // so the scan backtracks past it.
        let hyphen = self.add_state(None);
        let ws = self.add_state(Some(TokenKind::Ws));
        let nl = self.add_state(Some(TokenKind::Nl));
        let sym = self.add_state(Some(TokenKind::Sym));
        let scheme = self.add_state(Some(TokenKind::Scheme));

        // Literals go in first so keyword paths claim their characters
        // before any generic edge does.
        let mut literal_states = Vec::new();

        for tld in &lexicon.tlds {
            let word = tld.to_ascii_lowercase();
            let inserted =
                self.insert_literal(&word, start, TokenKind::Tld, TokenKind::Domain)?;
            literal_states.extend(inserted.created);
        }

        let inserted =
            self.insert_literal("localhost", start, TokenKind::Localhost, TokenKind::Domain)?;
        literal_states.extend(inserted.created);

        for entry in &lexicon.schemes {
            let word = entry.name.to_ascii_lowercase();
            // The bare scheme word stays generic text; only the delimiting
            // colon upgrades it to a scheme token.
            let inserted =
                self.insert_literal(&word, start, TokenKind::Domain, TokenKind::Domain)?;
            self.state_mut(inserted.last).link(':', scheme)?;
            literal_states.extend(inserted.created);

            if entry.secure {
                let secure_word = format!("{word}s");
                let inserted =
                    self.insert_literal(&secure_word, start, TokenKind::Domain, TokenKind::Domain)?;
                self.state_mut(inserted.last).link(':', scheme)?;
                literal_states.extend(inserted.created);
            }
        }

        // One-hop structural symbols.
        for &(ch, kind) in SYMBOL_EDGES {
            let target = self.add_state(Some(kind));
            self.state_mut(start).link(ch, target)?;
        }
        let punctuation = self.add_state(Some(TokenKind::Punctuation));
        for &ch in PUNCTUATION_CHARS {
            self.state_mut(start).link(ch, punctuation)?;
        }

        // Whitespace collapses per run; a newline never merges.
        for &ch in NON_NEWLINE_WHITESPACE {
            self.state_mut(start).link(ch, ws)?;
            self.state_mut(ws).link(ch, ws)?;
        }
        self.state_mut(start).link('\n', nl)?;

        // Generic entry points for characters no literal claimed.
        for ch in '0'..='9' {
            self.state_mut(start).link_missing(ch, num);
        }
        for ch in 'a'..='z' {
            self.state_mut(start).link_missing(ch, domain);
        }

        // Digits keep a run numeric; anything else alphanumeric degrades
        // it to a domain label via the fallback below.
        for ch in '0'..='9' {
            self.state_mut(num).link(ch, num)?;
        }

        for &id in &literal_states {
            self.wire_domain_fallback(id, domain, hyphen);
        }
        self.wire_domain_fallback(num, domain, hyphen);
        self.wire_domain_fallback(domain, domain, hyphen);

        // Hyphen runs stay pending until an alphanumeric resumes the label.
        self.state_mut(hyphen).link('-', hyphen)?;
        for ch in ascii_alnum() {
            self.state_mut(hyphen).link(ch, domain)?;
        }

        // Catch-all: the start state can always consume one character.
        self.state_mut(start).set_default(sym);

        Ok(Automaton {
            states: self.states,
            start,
        })
    }
}
