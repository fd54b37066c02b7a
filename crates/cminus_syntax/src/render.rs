//! Text renderings of the five compiler artifacts.
//!
//! Each function returns the complete file content; every line, including the "no errors"
//! lines, ends with `\n`. Persisting the text is the caller's job.

use crate::diagnostics::{LexicalError, SyntaxError};
use crate::lexer::ScanResult;
use crate::symbols::SymbolTable;
use crate::tree::ParseNode;

pub const NO_LEXICAL_ERRORS: &str = "No lexical errors found.";
pub const NO_SYNTAX_ERRORS: &str = "No syntax errors found.";

/// Token listing: `<line>. (<KIND>, <lexeme>) ...`, one line per source line that produced a token.
pub fn tokens(scan: &ScanResult) -> String {
    let mut out = String::new();
    for (line, tokens) in scan.lines() {
        let items: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        out.push_str(&format!("{line}. {}\n", items.join(" ")));
    }
    out
}

/// Lexical error listing: `<line>. (<lexeme>, <message>)` per error, in detection order.
pub fn lexical_errors(errors: &[LexicalError]) -> String {
    if errors.is_empty() {
        return format!("{NO_LEXICAL_ERRORS}\n");
    }
    errors.iter().map(|err| format!("{err}\n")).collect()
}

/// Symbol table: `<index>. <lexeme>`, 1-indexed.
pub fn symbol_table(symbols: &SymbolTable) -> String {
    symbols
        .iter()
        .enumerate()
        .map(|(i, lexeme)| format!("{}. {lexeme}\n", i + 1))
        .collect()
}

pub fn syntax_errors(errors: &[SyntaxError]) -> String {
    if errors.is_empty() {
        return format!("{NO_SYNTAX_ERRORS}\n");
    }
    errors.iter().map(|err| format!("{err}\n")).collect()
}

pub fn parse_tree(tree: &ParseNode) -> String {
    tree.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;
    use crate::parser;

    #[test]
    fn test_token_listing_groups_by_line() {
        let scan = lexer::lex("int x;\n\n/* c */ x = 10;\n");
        insta::assert_snapshot!(tokens(&scan), @r"
        1. (KEYWORD, int) (ID, x) (SYMBOL, ;)
        3. (ID, x) (SYMBOL, =) (NUM, 10) (SYMBOL, ;)
        ");
    }

    #[test]
    fn test_empty_listings() {
        let scan = lexer::lex("");
        assert_eq!(tokens(&scan), "");
        assert_eq!(lexical_errors(&scan.errors), "No lexical errors found.\n");
        assert_eq!(syntax_errors(&[]), "No syntax errors found.\n");
    }

    #[test]
    fn test_lexical_error_listing() {
        let scan = lexer::lex("int 12a3;\nx = 007 @;\n*/");
        insta::assert_snapshot!(lexical_errors(&scan.errors), @r"
        1. (12a3, Malformed number)
        2. (007, Malformed number)
        2. (@, Illegal character)
        3. (*/, Stray closing comment)
        ");
    }

    #[test]
    fn test_symbol_table_listing() {
        let scan = lexer::lex("void main(void) { int count; count = main; }");
        insta::assert_snapshot!(symbol_table(&scan.symbols), @r"
        1. break
        2. else
        3. for
        4. if
        5. int
        6. return
        7. void
        8. main
        9. count
        ");
    }

    #[test]
    fn test_syntax_error_listing() {
        let scan = lexer::lex("int x ( int a { return a ; }");
        let outcome = parser::parse(&scan.parser_input());
        assert_eq!(syntax_errors(&outcome.errors), "syntax error, missing )\n");
        assert!(parse_tree(&outcome.tree).starts_with("Program\n    ├── Declaration-list\n"));
    }
}
