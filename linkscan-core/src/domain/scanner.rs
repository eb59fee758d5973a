//! The scanning loop: longest match with backtracking.

use crate::domain::automaton::Automaton;
use crate::domain::token::{Token, TokenKind};

/// Tokenize `text` against `automaton`.
///
/// A pure function of its inputs: one left-to-right pass, no external
/// state. Matching runs on per-character lowercased text while token
/// substrings are cut from the original, so casing is preserved. The
/// emitted tokens tile the input exactly: concatenating their texts in
/// order reproduces `text`.
///
/// Scanning never fails. Characters outside the configured alphabet fall
/// back one at a time to the catch-all symbol category, and an empty input
/// yields an empty sequence.
pub fn tokenize<'a>(automaton: &Automaton, text: &'a str) -> Vec<Token<'a>> {
    // Byte offset of every character, for cutting original-case slices.
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    // Lowercased working copy used for matching only. Folding is done per
    // character (keeping a 1:1 alignment with the original) the same way
    // the literals were normalized at build time.
    let lower: Vec<char> = chars
        .iter()
        .map(|&(_, ch)| ch.to_lowercase().next().unwrap_or(ch))
        .collect();

    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        let mut state = automaton.start();
        let mut walked = 0;
        let mut accepted: Option<(TokenKind, usize)> = None;

        // Walk as far as transitions allow, remembering the most recent
        // accepting state. Characters walked past it are given back below.
        while cursor + walked < chars.len() {
            let Some(next) = automaton.next(state, lower[cursor + walked]) else {
                break;
            };
            state = next;
            walked += 1;
            if let Some(kind) = automaton.accept(state) {
                accepted = Some((kind, walked));
            }
        }

        // The start state's catch-all default makes at least one step
        // always possible, and every state reachable in one step from it
        // accepts, so `accepted` is always set for a compiled automaton.
        // The fallback keeps a hand-built graph from wedging the loop.
        let (kind, len) = accepted.unwrap_or((TokenKind::Sym, 1));

        let from = chars[cursor].0;
        let to = chars
            .get(cursor + len)
            .map_or(text.len(), |&(offset, _)| offset);
        tokens.push(kind.token(&text[from..to]));
        cursor += len;
    }

    tokens
}
