//! Predictive (LL(1)) parser for the C-minus language
//!
//! Converts a `$`-terminated token stream into a concrete [`ParseNode`] tree following the
//! left-factored, non-left-recursive C-minus grammar. Every production is chosen from the current
//! lookahead alone; there is no backtracking.
//!
//! ## Examples
//!
//! ```rust
//! use cminus_syntax::{lexer, parser};
//!
//! let scan = lexer::lex("int main(void) { return 0; }");
//! let outcome = parser::parse(&scan.parser_input());
//! assert!(outcome.errors.is_empty());
//! assert_eq!(outcome.tree.label().to_string(), "Program");
//! ```

use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenClass, TokenKind};
use crate::span::Span;
use crate::tree::{NodeLabel, ParseNode};
use cminus_core::lang::grammar::{Lead, NonTerminal};
use cminus_core::lang::keywords::{self, KeywordId};
use cminus_core::lang::symbols::{self, SymbolCategory, SymbolId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
