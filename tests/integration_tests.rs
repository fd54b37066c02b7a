//! Integration tests for the C-minus compiler front end

use std::fs;
use std::path::{Path, PathBuf};

use cminus::config::{Artifact, OutputConfig};
use cminus::output::FileSink;
use cminus::{compile, lexer, parser};
use tempfile::tempdir;

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "cm"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures scan and parse without diagnostics
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let compilation = compile(&source);
        assert!(
            !compilation.has_diagnostics(),
            "Expected {} to be clean, got lexical {:?} and syntax {:?}",
            path.display(),
            compilation.scan.errors,
            compilation.outcome.errors
        );
    }
}

/// Test that invalid fixtures produce diagnostics and still a complete tree
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let compilation = compile(&source);
        assert!(compilation.has_diagnostics(), "Expected {} to report errors", path.display());
        assert!(
            compilation.render(Artifact::ParseTree).ends_with("    └── $\n"),
            "Expected {} to yield a tree ending in the sentinel",
            path.display()
        );
    }
}

#[test]
fn test_file_sink_writes_all_artifacts() {
    let dir = tempdir().unwrap();
    let source = "int a[2];\nvoid main(void) {\n  a[0] = 1;\n}\n";

    let mut sink = FileSink::new(OutputConfig::new().with_out_dir(dir.path()));
    compile(source).write_to(&mut sink).unwrap();

    let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
    assert_eq!(
        read("tokens.txt"),
        "\
1. (KEYWORD, int) (ID, a) (SYMBOL, [) (NUM, 2) (SYMBOL, ]) (SYMBOL, ;)
2. (KEYWORD, void) (ID, main) (SYMBOL, () (KEYWORD, void) (SYMBOL, )) (SYMBOL, {)
3. (ID, a) (SYMBOL, [) (NUM, 0) (SYMBOL, ]) (SYMBOL, =) (NUM, 1) (SYMBOL, ;)
4. (SYMBOL, })
"
    );
    assert_eq!(read("lexical_errors.txt"), "No lexical errors found.\n");
    assert_eq!(
        read("symbol_table.txt"),
        "1. break\n2. else\n3. for\n4. if\n5. int\n6. return\n7. void\n8. a\n9. main\n"
    );
    assert_eq!(read("syntax_errors.txt"), "No syntax errors found.\n");

    let tree = read("parse_tree.txt");
    assert!(tree.starts_with("Program\n    ├── Declaration-list\n"));
    assert!(tree.contains("(ID, main)"));
    assert!(tree.ends_with("    └── $\n"));
}

#[test]
fn test_unterminated_comment_end_to_end() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid/unterminated_comment.cm");
    let source = fs::read_to_string(path).unwrap();
    let compilation = compile(&source);

    assert_eq!(
        compilation.render(Artifact::LexicalErrors),
        "2. (/*  never ..., Open comment at EOF)\n"
    );
    assert_eq!(compilation.render(Artifact::Tokens), "1. (KEYWORD, int) (ID, x) (SYMBOL, ;)\n");
    assert_eq!(compilation.render(Artifact::SyntaxErrors), "No syntax errors found.\n");
}

#[test]
fn test_lexical_errors_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid/lexical_errors.cm");
    let source = fs::read_to_string(path).unwrap();
    let compilation = compile(&source);

    insta::assert_snapshot!(compilation.render(Artifact::LexicalErrors), @r"
    1. (x@, Illegal character)
    1. (007, Malformed number)
    ");
    insta::assert_snapshot!(compilation.render(Artifact::SyntaxErrors), @r"
    syntax error, missing ID
    syntax error, missing ;
    syntax error, missing $
    ");
}

/// Scanner behaviour seen through the public API
mod lexer_tests {
    use super::*;

    #[test]
    fn test_numbers() {
        let scan = lexer::lex("0 007 12a3 42");
        let numbers: Vec<&str> = scan.tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(numbers, ["0", "42"]);
        let errors: Vec<String> = scan.errors.iter().map(ToString::to_string).collect();
        assert_eq!(errors, ["1. (007, Malformed number)", "1. (12a3, Malformed number)"]);
    }

    #[test]
    fn test_equality_versus_assignment() {
        let scan = lexer::lex("a==b=c");
        let lexemes: Vec<&str> = scan.tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, ["a", "==", "b", "=", "c"]);
    }
}

/// Parser behaviour seen through the public API
mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_reaches_sentinel_on_garbage() {
        let scan = lexer::lex("( ( ( [ [ { if for");
        let outcome = parser::parse(&scan.parser_input());
        assert!(!outcome.errors.is_empty());
        let last = outcome.tree.children().last().map(|node| node.label().to_string());
        assert_eq!(last.as_deref(), Some("$"));
    }
}
