//! Define the reserved keyword vocabulary for the C-minus language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Int` is an identifier, `int` is a keyword.
//! - [`KEYWORDS`] is kept in lexicographic order of spelling. The symbol table is seeded from it,
//!   so the order is observable in the symbol table artifact.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! assert_eq!(keywords::from_str("while"), None);
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - Variants are declared in the same order as [`KEYWORDS`]; `info_for` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    Break,
    Else,
    For,
    If,
    Int,
    Return,
    Void,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Statement-introducing words (`if`, `for`, `return`, ...).
    ControlFlow,
    /// Type specifiers usable in declarations and parameter lists.
    Type,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, sorted by spelling.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Void, "void", KeywordCategory::Type),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling, e.g. `"return"`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` for keywords that name a type (`int`, `void`).
pub fn is_type_specifier(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Type
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Iterate over all keyword spellings in registry (lexicographic) order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|k| k.canonical)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("int"), Some(KeywordId::Int));
        assert_eq!(from_str("Int"), None);
        assert_eq!(from_str("INT"), None);
    }

    #[test]
    fn test_type_specifiers() {
        assert!(is_type_specifier(KeywordId::Int));
        assert!(is_type_specifier(KeywordId::Void));
        assert!(!is_type_specifier(KeywordId::Return));
    }
}
