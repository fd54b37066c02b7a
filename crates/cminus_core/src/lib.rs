//! Provide the canonical language vocabulary shared by the C-minus scanner, parser, and tooling.
//!
//! This crate is intentionally small and dependency-free. It answers "what are the words of the
//! language?" (reserved keywords, recognized symbols, grammar nonterminal names) and nothing else.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no scanner/parser types.
//! - Syntax rules (which token may appear where) live in `cminus_syntax`; the registries here only
//!   provide stable ids, spellings, and light metadata.

pub mod lang;
