//! Automaton state: a node in the frozen transition graph.

use crate::domain::error::BuildError;
use crate::domain::token::TokenKind;

/// Index of a state in the automaton's state table.
///
/// States reference each other by plain index rather than by pointer, which
/// keeps the graph trivially immutable and shareable once construction is
/// done.
pub type StateId = u32;

/// A single node in the scanner automaton.
///
/// Character transitions live in a sorted `(char, StateId)` table looked up
/// by binary search. A state may additionally carry a default successor,
/// taken when no character-specific edge matches, and an accept tag marking
/// it as a valid stopping point for a token.
#[derive(Debug, Clone, Default)]
pub struct State {
    edges: Vec<(char, StateId)>,
    default: Option<StateId>,
    accept: Option<TokenKind>,
}

impl State {
    pub(crate) fn accepting(kind: TokenKind) -> Self {
        Self {
            accept: Some(kind),
            ..Self::default()
        }
    }

    /// Register a single-character edge. Registering the same `(ch, to)`
    /// pair again is a no-op; pointing an existing key at a different
    /// target is a construction error, since transition keys are unique.
    pub(crate) fn link(&mut self, ch: char, to: StateId) -> Result<(), BuildError> {
        match self.edges.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => {
                if self.edges[i].1 != to {
                    return Err(BuildError::ConflictingTransition { ch });
                }
                Ok(())
            }
            Err(i) => {
                self.edges.insert(i, (ch, to));
                Ok(())
            }
        }
    }

    /// Layer a fallback edge: registers `ch -> to` only when `ch` is not
    /// already claimed, so literal paths keep priority.
    pub(crate) fn link_missing(&mut self, ch: char, to: StateId) {
        if let Err(i) = self.edges.binary_search_by_key(&ch, |&(c, _)| c) {
            self.edges.insert(i, (ch, to));
        }
    }

    /// Explicit edge for `ch`, ignoring the default successor. Used during
    /// construction for prefix reuse, where the default must not hijack a
    /// literal path.
    pub(crate) fn edge(&self, ch: char) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| self.edges[i].1)
    }

    pub(crate) fn set_default(&mut self, to: StateId) {
        self.default = Some(to);
    }

    pub(crate) fn set_accept(&mut self, kind: Option<TokenKind>) {
        self.accept = kind;
    }

    /// Successor for `ch`: the explicit edge when present, else the default
    /// edge, else none. `ch` must already be lowercased by the caller; the
    /// state never folds case itself.
    pub fn next(&self, ch: char) -> Option<StateId> {
        match self.edges.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => Some(self.edges[i].1),
            Err(_) => self.default,
        }
    }

    /// Whether a token may legitimately end at this state.
    pub fn is_accepting(&self) -> bool {
        self.accept.is_some()
    }

    /// Accept tag of this state, if any.
    pub fn accept(&self) -> Option<TokenKind> {
        self.accept
    }

    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
