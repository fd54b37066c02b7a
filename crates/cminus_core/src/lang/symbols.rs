//! Symbol vocabulary.
//!
//! This module defines the canonical set of symbol tokens used by the scanner and parser:
//! separators, delimiters, arithmetic and relational operators, and assignment.
//!
//! ## Notes
//! - Every symbol is a single character except `==`, which the scanner builds from two `=`.
//! - A character that starts a symbol also terminates an identifier; see [`is_symbol_char`].
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_str("=="), Some(SymbolId::EqEq));
//! assert_eq!(symbols::from_char('['), Some(SymbolId::LBracket));
//! assert_eq!(symbols::as_str(SymbolId::Semicolon), ";");
//! ```

/// Broad syntactic grouping for symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// `;`, `:` and `,`.
    Separator,
    /// Brackets, parentheses and braces.
    Delimiter,
    /// `+ - * /`.
    Arithmetic,
    /// `<` and `==`.
    Relational,
    /// `=`.
    Assignment,
}

/// Stable identifier for symbol tokens.
///
/// ## Notes
/// - Variants are declared in the same order as [`SYMBOLS`]; `info_for` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    // Separators
    Semicolon,
    Colon,
    Comma,

    // Delimiters
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Relational
    Lt,
    EqEq,

    // Assignment
    Eq,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub canonical: &'static str,
    pub category: SymbolCategory,
}

/// Registry of all symbols.
pub const SYMBOLS: &[SymbolInfo] = &[
    // Separators
    info(SymbolId::Semicolon, ";", SymbolCategory::Separator),
    info(SymbolId::Colon, ":", SymbolCategory::Separator),
    info(SymbolId::Comma, ",", SymbolCategory::Separator),
    // Delimiters
    info(SymbolId::LBracket, "[", SymbolCategory::Delimiter),
    info(SymbolId::RBracket, "]", SymbolCategory::Delimiter),
    info(SymbolId::LParen, "(", SymbolCategory::Delimiter),
    info(SymbolId::RParen, ")", SymbolCategory::Delimiter),
    info(SymbolId::LBrace, "{", SymbolCategory::Delimiter),
    info(SymbolId::RBrace, "}", SymbolCategory::Delimiter),
    // Arithmetic
    info(SymbolId::Plus, "+", SymbolCategory::Arithmetic),
    info(SymbolId::Minus, "-", SymbolCategory::Arithmetic),
    info(SymbolId::Star, "*", SymbolCategory::Arithmetic),
    info(SymbolId::Slash, "/", SymbolCategory::Arithmetic),
    // Relational
    info(SymbolId::Lt, "<", SymbolCategory::Relational),
    info(SymbolId::EqEq, "==", SymbolCategory::Relational),
    // Assignment
    info(SymbolId::Eq, "=", SymbolCategory::Assignment),
];

/// Return the canonical spelling for a symbol.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a symbol.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Return the full metadata entry for a symbol.
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    &SYMBOLS[id as usize]
}

/// Resolve a symbol spelling to its identifier.
pub fn from_str(s: &str) -> Option<SymbolId> {
    SYMBOLS.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Resolve a single character to the one-character symbol it spells.
///
/// ## Notes
/// - `=` resolves to [`SymbolId::Eq`]; combining `==` is the scanner's job.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS
        .iter()
        .find(|p| p.canonical.len() == 1 && p.canonical.starts_with(c))
        .map(|p| p.id)
}

/// Return `true` if `c` is the first character of any recognized symbol.
pub fn is_symbol_char(c: char) -> bool {
    from_char(c).is_some()
}

const fn info(id: SymbolId, canonical: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo { id, canonical, category }
}
