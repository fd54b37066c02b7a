//! C-minus language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, symbols, and
//! the names of grammar nonterminals used to label parse tree nodes.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `SymbolId`) and look up spellings and
//! metadata via the registry tables, instead of comparing raw strings all over the front end.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::keywords::{self, KeywordId};
//! use cminus_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert_eq!(symbols::as_str(SymbolId::EqEq), "==");
//! ```

pub mod grammar;
pub mod keywords;
pub mod symbols;
