//! End-to-end tokenizer tests against the default lexicon.

use linkscan_core::{TokenKind, TokenScanner};

fn kinds(scanner: &TokenScanner, input: &str) -> Vec<TokenKind> {
    scanner.tokenize(input).iter().map(|t| t.kind).collect()
}

fn texts(scanner: &TokenScanner, input: &str) -> Vec<String> {
    scanner
        .tokenize(input)
        .iter()
        .map(|t| t.text.to_string())
        .collect()
}

#[test]
fn test_email_scenario() {
    let scanner = TokenScanner::new();
    let input = "Email test@gmail.com now";

    assert_eq!(
        kinds(&scanner, input),
        vec![
            TokenKind::Domain,
            TokenKind::Ws,
            TokenKind::Domain,
            TokenKind::At,
            TokenKind::Domain,
            TokenKind::Dot,
            TokenKind::Tld,
            TokenKind::Ws,
            TokenKind::Domain,
        ]
    );
    assert_eq!(
        texts(&scanner, input),
        vec!["Email", " ", "test", "@", "gmail", ".", "com", " ", "now"]
    );
}

#[test]
fn test_coverage_reproduces_input_exactly() {
    let scanner = TokenScanner::new();
    let inputs = [
        "",
        "plain words only",
        "https://example.com/path?q=1#frag",
        "tabs\tand\nnewlines\r\n",
        "unicode: 日本語テキスト émoji 🦀",
        "mixed (brackets) [and] {braces}, plus; \"quotes\"!",
        "trailing-hyphen- and --double",
    ];

    for input in inputs {
        let tokens = scanner.tokenize(input);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, input, "tokens must tile {input:?}");
    }
}

#[test]
fn test_determinism() {
    let scanner = TokenScanner::new();
    let input = "see https://a-b.co, mail me@x.org!";
    assert_eq!(scanner.tokenize(input), scanner.tokenize(input));
}

#[test]
fn test_case_preserved_under_case_insensitive_matching() {
    let scanner = TokenScanner::new();
    let input = "ExAmple.COM";

    assert_eq!(
        texts(&scanner, input),
        vec!["ExAmple", ".", "COM"]
    );
    assert_eq!(
        kinds(&scanner, input),
        vec![TokenKind::Domain, TokenKind::Dot, TokenKind::Tld]
    );
}

#[test]
fn test_longest_match_splits_domain_from_tld() {
    let scanner = TokenScanner::new();
    assert_eq!(
        kinds(&scanner, "example.com"),
        vec![TokenKind::Domain, TokenKind::Dot, TokenKind::Tld]
    );
    // A keyword that keeps going degrades into plain text, never a split.
    assert_eq!(kinds(&scanner, "communal"), vec![TokenKind::Domain]);
}

#[test]
fn test_hyphenated_label_is_one_token() {
    let scanner = TokenScanner::new();
    assert_eq!(
        kinds(&scanner, "foo-bar.com"),
        vec![TokenKind::Domain, TokenKind::Dot, TokenKind::Tld]
    );
    assert_eq!(texts(&scanner, "foo-bar.com")[0], "foo-bar");
}

#[test]
fn test_no_token_ends_on_trailing_hyphen() {
    let scanner = TokenScanner::new();

    let tokens = scanner.tokenize("foo-");
    assert_eq!(tokens[0].kind, TokenKind::Domain);
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Sym);
    assert_eq!(tokens[1].text, "-");

    let tokens = scanner.tokenize("foo- bar");
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "-");
    assert_eq!(tokens[2].kind, TokenKind::Ws);
}

#[test]
fn test_whitespace_run_collapses_to_one_token() {
    let scanner = TokenScanner::new();
    let tokens = scanner.tokenize("a   b");

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Domain, TokenKind::Ws, TokenKind::Domain]
    );
    assert_eq!(tokens[1].text, "   ");
}

#[test]
fn test_newline_never_merges_with_whitespace() {
    let scanner = TokenScanner::new();

    assert_eq!(
        kinds(&scanner, "a\nb"),
        vec![TokenKind::Domain, TokenKind::Nl, TokenKind::Domain]
    );
    // A CRLF pair is a whitespace token followed by a newline token.
    assert_eq!(
        kinds(&scanner, "a\r\nb"),
        vec![
            TokenKind::Domain,
            TokenKind::Ws,
            TokenKind::Nl,
            TokenKind::Domain
        ]
    );
    // Consecutive newlines stay singletons.
    assert_eq!(
        kinds(&scanner, "\n\n"),
        vec![TokenKind::Nl, TokenKind::Nl]
    );
}

#[test]
fn test_protocol_accepts_exactly_at_colon() {
    let scanner = TokenScanner::new();

    let tokens = scanner.tokenize("https://");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Scheme, TokenKind::Slash, TokenKind::Slash]
    );
    assert_eq!(tokens[0].text, "https:");

    assert_eq!(kinds(&scanner, "http"), vec![TokenKind::Domain]);
    assert_eq!(kinds(&scanner, "ftp:"), vec![TokenKind::Scheme]);
    assert_eq!(kinds(&scanner, "ftps:"), vec![TokenKind::Scheme]);
    assert_eq!(kinds(&scanner, "mailto:"), vec![TokenKind::Scheme]);
    // "mailto" has no secure variant.
    assert_eq!(
        kinds(&scanner, "mailtos:"),
        vec![TokenKind::Domain, TokenKind::Colon]
    );
}

#[test]
fn test_localhost_is_its_own_category() {
    let scanner = TokenScanner::new();
    assert_eq!(
        kinds(&scanner, "localhost:8080"),
        vec![TokenKind::Localhost, TokenKind::Colon, TokenKind::Num]
    );
    // Keep going and it is ordinary text again.
    assert_eq!(kinds(&scanner, "localhosts"), vec![TokenKind::Domain]);
}

#[test]
fn test_unmapped_characters_fall_back_one_at_a_time() {
    let scanner = TokenScanner::new();

    let tokens = scanner.tokenize("αβγ");
    assert_eq!(tokens.len(), 3);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Sym);
    }

    // And the scan keeps going normally afterwards.
    assert_eq!(
        kinds(&scanner, "α example.com"),
        vec![
            TokenKind::Sym,
            TokenKind::Ws,
            TokenKind::Domain,
            TokenKind::Dot,
            TokenKind::Tld
        ]
    );
}

#[test]
fn test_structural_symbols_are_single_tokens() {
    let scanner = TokenScanner::new();
    assert_eq!(
        kinds(&scanner, "@.+#?/:()[]{}"),
        vec![
            TokenKind::At,
            TokenKind::Dot,
            TokenKind::Plus,
            TokenKind::Pound,
            TokenKind::Query,
            TokenKind::Slash,
            TokenKind::Colon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
        ]
    );
    assert_eq!(
        kinds(&scanner, ",;!\"'"),
        vec![TokenKind::Punctuation; 5]
    );
}

#[test]
fn test_full_url_token_sequence() {
    let scanner = TokenScanner::new();
    assert_eq!(
        kinds(&scanner, "https://sub-domain.example.co/a?b=1"),
        vec![
            TokenKind::Scheme,
            TokenKind::Slash,
            TokenKind::Slash,
            TokenKind::Domain,
            TokenKind::Dot,
            TokenKind::Domain,
            TokenKind::Dot,
            TokenKind::Tld,
            TokenKind::Slash,
            TokenKind::Domain,
            TokenKind::Query,
            TokenKind::Domain,
            TokenKind::Sym,
            TokenKind::Num,
        ]
    );
}
