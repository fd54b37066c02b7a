//! Token types for the C-minus scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for symbols (including the two-character `==`)
//!
//! ## Notes
//! - Identifiers and numbers keep their exact lexeme; numbers are never evaluated.
//! - `Eof` is the end-of-input sentinel appended for the parser. Its lexeme is `$`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use cminus_core::lang::keywords::{self, KeywordId};
use cminus_core::lang::symbols::{self, SymbolId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Keyword(KeywordId),
    Number(String),
    Symbol(SymbolId),
    Eof,
}

/// Payload-free classification of a token, used for kind-based matching and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Identifier,
    Keyword,
    Number,
    Symbol,
    EndOfInput,
}

impl TokenClass {
    /// Label used in token listings and parse tree leaves.
    pub fn label(self) -> &'static str {
        match self {
            TokenClass::Identifier => "ID",
            TokenClass::Keyword => "KEYWORD",
            TokenClass::Number => "NUM",
            TokenClass::Symbol => "SYMBOL",
            TokenClass::EndOfInput => EOF_LEXEME,
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lexeme (and label) of the end-of-input sentinel.
pub const EOF_LEXEME: &str = "$";

impl TokenKind {
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Ident(_) => TokenClass::Identifier,
            TokenKind::Keyword(_) => TokenClass::Keyword,
            TokenKind::Number(_) => TokenClass::Number,
            TokenKind::Symbol(_) => TokenClass::Symbol,
            TokenKind::Eof => TokenClass::EndOfInput,
        }
    }

    /// The literal text this token stands for.
    pub fn lexeme(&self) -> &str {
        match self {
            TokenKind::Ident(name) | TokenKind::Number(name) => name,
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Symbol(id) => symbols::as_str(*id),
            TokenKind::Eof => EOF_LEXEME,
        }
    }
}

/// A token with its kind, source span and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }

    /// Convenience wrapper for `self.kind.lexeme()`.
    pub fn lexeme(&self) -> &str {
        self.kind.lexeme()
    }

    /// Convenience wrapper for `self.kind.class()`.
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

/// Renders as `(KIND, lexeme)`, the form used by token listings and parse tree leaves.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.class(), self.lexeme())
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
