//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use cminus_core::lang::keywords::KeywordId;
use cminus_core::lang::symbols::SymbolId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the symbol id, if this is a symbol token.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self {
            TokenKind::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given symbol.
    pub fn is_symbol(&self, id: SymbolId) -> bool {
        matches!(self, TokenKind::Symbol(s) if *s == id)
    }

    /// Return `true` if this token's lexeme goes into the symbol table.
    pub fn is_name(&self) -> bool {
        matches!(self, TokenKind::Ident(_) | TokenKind::Keyword(_))
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.symbol_id()`.
    pub fn symbol_id(&self) -> Option<SymbolId> {
        self.kind.symbol_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_id_accessors() {
        let kw = Token::new(TokenKind::Keyword(KeywordId::Return), Span::new(0, 6), 1);
        assert_eq!(kw.keyword_id(), Some(KeywordId::Return));
        assert_eq!(kw.symbol_id(), None);
        assert!(kw.kind.is_keyword(KeywordId::Return));
        assert!(!kw.kind.is_keyword(KeywordId::Break));

        let sym = TokenKind::Symbol(SymbolId::EqEq);
        assert!(sym.is_symbol(SymbolId::EqEq));
        assert!(!sym.is_symbol(SymbolId::Eq));
    }

    #[test]
    fn test_is_name() {
        assert!(TokenKind::Ident("x".to_string()).is_name());
        assert!(TokenKind::Keyword(KeywordId::Int).is_name());
        assert!(!TokenKind::Number("1".to_string()).is_name());
        assert!(!TokenKind::Eof.is_name());
    }
}
