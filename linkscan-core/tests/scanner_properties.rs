//! Property-based tests for the scanning loop.

use linkscan_core::{TokenKind, TokenScanner};
use proptest::prelude::*;
use std::sync::OnceLock;

fn scanner() -> &'static TokenScanner {
    static SCANNER: OnceLock<TokenScanner> = OnceLock::new();
    SCANNER.get_or_init(TokenScanner::new)
}

proptest! {
    /// Concatenating the token texts reproduces the input byte for byte.
    #[test]
    fn prop_tokens_tile_any_input(input in ".*") {
        let tokens = scanner().tokenize(&input);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    /// Identical input always yields an identical token sequence.
    #[test]
    fn prop_scan_is_deterministic(input in ".*") {
        prop_assert_eq!(scanner().tokenize(&input), scanner().tokenize(&input));
    }

    /// Every token is non-empty, so each outer-loop iteration made
    /// progress and the scan terminated linearly.
    #[test]
    fn prop_every_token_is_nonempty(input in ".*") {
        for token in scanner().tokenize(&input) {
            prop_assert!(!token.text.is_empty());
        }
    }

    /// Link-ish inputs: no word-like token ever ends on a bare hyphen.
    #[test]
    fn prop_no_wordlike_token_ends_with_hyphen(input in "[a-zA-Z0-9. -]{0,64}") {
        for token in scanner().tokenize(&input) {
            if matches!(
                token.kind,
                TokenKind::Domain | TokenKind::Num | TokenKind::Tld | TokenKind::Localhost
            ) {
                prop_assert!(!token.text.ends_with('-'), "token {token} ends with '-'");
            }
        }
    }

    /// Whitespace runs are maximal: two horizontal-whitespace tokens never
    /// touch, and a newline token is always exactly one `\n`.
    #[test]
    fn prop_whitespace_runs_are_maximal(input in "[a\t\n ]{0,64}") {
        let tokens = scanner().tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].kind == TokenKind::Ws && pair[1].kind == TokenKind::Ws),
                "adjacent whitespace tokens"
            );
        }
        for token in &tokens {
            if token.kind == TokenKind::Nl {
                prop_assert_eq!(token.text, "\n");
            }
        }
    }

    /// Case-folding is internal only: matching the lowercased form never
    /// changes which characters the tokens carry.
    #[test]
    fn prop_kinds_are_case_insensitive(input in "[a-zA-Z.:/@ ]{0,64}") {
        let lower = input.to_lowercase();
        // ASCII-only input, so per-character folding equals full folding.
        let original: Vec<TokenKind> = scanner().tokenize(&input).iter().map(|t| t.kind).collect();
        let folded: Vec<TokenKind> = scanner().tokenize(&lower).iter().map(|t| t.kind).collect();
        prop_assert_eq!(original, folded);
    }
}
