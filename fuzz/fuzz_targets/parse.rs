#![no_main]

use cminus_syntax::{lexer, parser, render};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let scan = lexer::lex(s);
        let outcome = parser::parse(&scan.parser_input());

        // The parse always reaches the sentinel, and every artifact renders
        assert_eq!(
            outcome.tree.children().last().map(|node| node.label().to_string()).as_deref(),
            Some("$")
        );
        let _ = render::tokens(&scan);
        let _ = render::parse_tree(&outcome.tree);
    }
});
