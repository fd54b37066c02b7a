//! Syntax frontend for C-minus: scanner, symbol table, predictive parser, parse tree, and the text
//! artifacts derived from them.
//!
//! This crate is dependency-light and never fails on malformed input: lexical and syntax problems
//! are collected as diagnostics while scanning and parsing run to completion.
//!
//! ## Notes
//! - Scanning runs to completion before parsing; the parser consumes the flattened token stream
//!   terminated by the `$` sentinel.
//! - Vocabulary identity (keywords/symbols/nonterminals) comes from `cminus_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use cminus_syntax::{lexer, parser, render};
//!
//! let scan = lexer::lex("int x;\n");
//! let outcome = parser::parse(&scan.parser_input());
//! assert_eq!(render::tokens(&scan), "1. (KEYWORD, int) (ID, x) (SYMBOL, ;)\n");
//! assert_eq!(render::syntax_errors(&outcome.errors), "No syntax errors found.\n");
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod span;
pub mod symbols;
pub mod token_helpers;
pub mod tree;
