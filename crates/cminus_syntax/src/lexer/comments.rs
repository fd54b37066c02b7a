//! Comment scanning for the C-minus scanner
//!
//! Handles `//` line comments, `/* */` block comments and stray `*/` closers. Comments never
//! produce tokens.

use super::tokens::TokenKind;
use super::{Lexer, Scanned};
use crate::diagnostics::{LexicalError, LexicalErrorKind};
use crate::span::Span;
use cminus_core::lang::symbols::SymbolId;

/// Number of comment-body characters quoted in an unterminated-comment error.
const UNTERMINATED_PREVIEW_CHARS: usize = 7;

impl<'a> Lexer<'a> {
    /// Scan from a `/`: a line comment, a block comment, or the `/` symbol.
    pub(super) fn scan_slash(&mut self, start: usize, line: usize) -> Scanned {
        self.advance();

        if self.match_char('/') {
            self.eat_while(|c| c != '\n');
            return Scanned::Comment;
        }

        if self.match_char('*') {
            return self.scan_block_comment(start, line);
        }

        self.token(TokenKind::Symbol(SymbolId::Slash), start, line)
    }

    /// Scan the body of a block comment; the opening `/*` is already consumed.
    fn scan_block_comment(&mut self, start: usize, line: usize) -> Scanned {
        let body_start = self.current_pos;

        loop {
            match self.peek() {
                None => {
                    let body = &self.source[body_start..self.current_pos];
                    let mut preview: String = body.chars().take(UNTERMINATED_PREVIEW_CHARS).collect();
                    if body.chars().nth(UNTERMINATED_PREVIEW_CHARS).is_some() {
                        preview.push_str("...");
                    }
                    return Scanned::Error(LexicalError::new(
                        LexicalErrorKind::UnterminatedComment,
                        format!("/* {preview}"),
                        line,
                        Span::new(start, self.current_pos),
                    ));
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return Scanned::Comment;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Report a `*/` with no open comment.
    pub(super) fn scan_stray_closing_comment(&mut self, start: usize, line: usize) -> Scanned {
        self.advance();
        self.advance();
        self.error(LexicalErrorKind::StrayClosingComment, start, line)
    }
}
