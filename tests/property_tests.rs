//! Property-based tests for the C-minus front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use cminus::lexer::{self, TokenClass};
use cminus::{Artifact, compile};
use cminus_core::lang::{keywords, symbols};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// One lexeme of the language: identifier, keyword, number or symbol.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    let keyword = prop::sample::select(keywords::spellings().collect::<Vec<_>>()).prop_map(str::to_string);
    let symbol = prop::sample::select(symbols::SYMBOLS.iter().map(|info| info.canonical).collect::<Vec<_>>())
        .prop_map(str::to_string);
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        "0|[1-9][0-9]{0,5}",
        keyword,
        symbol,
    ]
}

/// Well-formed lexemes separated by whitespace.
fn token_soup() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::vec((lexeme_strategy(), prop::sample::select(vec![" ", "\n", "\t", " \n "])), 0..60)
}

fn join(pieces: &[(String, &'static str)]) -> String {
    pieces.iter().map(|(lexeme, sep)| format!("{lexeme}{sep}")).collect()
}

fn expected_class(lexeme: &str) -> TokenClass {
    if keywords::from_str(lexeme).is_some() {
        TokenClass::Keyword
    } else if lexeme.starts_with(|c: char| c.is_ascii_digit()) {
        TokenClass::Number
    } else if lexeme.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        TokenClass::Identifier
    } else {
        TokenClass::Symbol
    }
}

/// Split a token listing back into `(KIND, lexeme)` pairs, in listing order.
fn parse_listing(listing: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in listing.lines() {
        let (_, rest) = line.split_once(". ").expect("listing line has a line-number prefix");
        let words: Vec<&str> = rest.split(' ').collect();
        for pair in words.chunks(2) {
            let kind = pair[0].trim_start_matches('(').trim_end_matches(',');
            let lexeme = pair[1].strip_suffix(')').expect("lexeme closes its pair");
            pairs.push((kind.to_string(), lexeme.to_string()));
        }
    }
    pairs
}

// =============================================================================
// Scanner properties
// =============================================================================

proptest! {
    /// Property: every lexeme is scanned exactly once, with the expected classification
    #[test]
    fn scanning_preserves_lexemes_and_classes(pieces in token_soup()) {
        let scan = lexer::lex(&join(&pieces));
        prop_assert!(scan.errors.is_empty(), "errors: {:?}", scan.errors);

        let scanned: Vec<(&str, TokenClass)> = scan.tokens.iter().map(|t| (t.lexeme(), t.class())).collect();
        let expected: Vec<(&str, TokenClass)> =
            pieces.iter().map(|(lexeme, _)| (lexeme.as_str(), expected_class(lexeme))).collect();
        prop_assert_eq!(scanned, expected);
    }

    /// Property: the token listing holds each token once, and re-scanning its lexemes
    /// reproduces the same classification
    #[test]
    fn token_listing_round_trips(pieces in token_soup()) {
        let compilation = compile(&join(&pieces));
        let listed = parse_listing(&compilation.render(Artifact::Tokens));

        let original: Vec<(String, String)> = compilation
            .scan
            .tokens
            .iter()
            .map(|t| (t.class().label().to_string(), t.lexeme().to_string()))
            .collect();
        prop_assert_eq!(&listed, &original);

        let rescanned = lexer::lex(&listed.iter().map(|(_, l)| l.as_str()).collect::<Vec<_>>().join(" "));
        let reclassified: Vec<(String, String)> = rescanned
            .tokens
            .iter()
            .map(|t| (t.class().label().to_string(), t.lexeme().to_string()))
            .collect();
        prop_assert_eq!(reclassified, original);
    }

    /// Property: the symbol table starts with the sorted reserved words and holds each
    /// identifier/keyword lexeme exactly once
    #[test]
    fn symbol_table_is_unique_with_sorted_keyword_prefix(pieces in token_soup()) {
        let scan = lexer::lex(&join(&pieces));
        let entries = scan.symbols.entries();

        let mut reserved: Vec<&str> = keywords::spellings().collect();
        reserved.sort_unstable();
        prop_assert_eq!(&entries[..reserved.len()], reserved.as_slice());

        let mut seen = std::collections::HashSet::new();
        for entry in entries {
            prop_assert!(seen.insert(entry.as_str()), "duplicate entry {}", entry);
        }
        for token in &scan.tokens {
            if matches!(token.class(), TokenClass::Identifier | TokenClass::Keyword) {
                prop_assert!(scan.symbols.contains(token.lexeme()));
            }
        }
    }

    /// Property: numerals with a leading zero are malformed unless they are exactly `0`
    #[test]
    fn leading_zero_numbers_are_malformed(digits in "0[0-9]{1,6}") {
        let scan = lexer::lex(&digits);
        prop_assert!(scan.tokens.is_empty());
        prop_assert_eq!(scan.errors.len(), 1);
        prop_assert_eq!(scan.errors[0].kind.message(), "Malformed number");
        prop_assert_eq!(&scan.errors[0].lexeme, &digits);
    }
}

// =============================================================================
// Robustness properties
// =============================================================================

proptest! {
    /// Property: arbitrary text scans and parses without panicking, and the parse always
    /// ends at the sentinel
    #[test]
    fn arbitrary_text_always_yields_a_complete_tree(source in "\\PC{0,200}") {
        let compilation = compile(&source);
        let last = compilation.outcome.tree.children().last().map(|node| node.label().to_string());
        prop_assert_eq!(last.as_deref(), Some("$"));
    }

    /// Property: token soup (mostly ill-formed programs) always terminates with a full tree
    /// whose consumed tokens are a prefix-preserving subsequence of the input
    #[test]
    fn token_soup_parses_to_the_sentinel(pieces in token_soup()) {
        let compilation = compile(&join(&pieces));
        let consumed = compilation.outcome.tree.consumed_lexemes();

        let mut input = compilation.scan.tokens.iter().map(|t| t.lexeme()).chain(["$"]);
        for lexeme in consumed.iter().filter(|l| **l != "$") {
            prop_assert!(input.any(|candidate| candidate == *lexeme), "{} consumed out of order", lexeme);
        }
        prop_assert!(compilation.render(Artifact::ParseTree).ends_with("    └── $\n"));
    }
}
