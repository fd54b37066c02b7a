//! Number scanning for the C-minus scanner
//!
//! Number literals are runs of ASCII digits. A run that continues into letters or `_`, or that
//! has a leading zero (other than the literal `0` itself), is a malformed number.

use super::tokens::TokenKind;
use super::{Lexer, Scanned};
use crate::diagnostics::LexicalErrorKind;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, line: usize) -> Scanned {
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
            self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
            return self.error(LexicalErrorKind::MalformedNumber, start, line);
        }

        let digits = self.lexeme_from(start);
        if digits.len() > 1 && digits.starts_with('0') {
            return self.error(LexicalErrorKind::MalformedNumber, start, line);
        }

        self.token(TokenKind::Number(digits.to_string()), start, line)
    }
}
