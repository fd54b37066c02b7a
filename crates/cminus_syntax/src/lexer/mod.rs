//! Scanner (lexer) for the C-minus language
//!
//! Handles tokenization including:
//! - Keywords (`break else for if int return void`) and identifiers
//! - Decimal number literals (no leading zeros)
//! - Symbols (`; : , [ ] ( ) { } + - * / < =` and `==`)
//! - `//` line comments and `/* */` block comments, which produce no tokens
//!
//! Scanning never fails. Anomalies are recorded as [`LexicalError`]s and scanning resumes at the
//! next character, so every input yields a full [`ScanResult`].
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenClass, Token)
//! - `comments` - Comment elision, stray `*/` detection
//! - `numbers` - Numeric literal scanning

mod comments;
mod numbers;
pub mod tokens;

pub use tokens::{EOF_LEXEME, Token, TokenClass, TokenKind, keyword_id};

use std::collections::BTreeMap;

use crate::diagnostics::{LexicalError, LexicalErrorKind};
use crate::span::Span;
use crate::symbols::SymbolTable;
use cminus_core::lang::symbols::{self, SymbolId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Each call to `scan_item` runs one decision procedure from the current character:
//
//   whitespace* → '/'            → line comment | block comment | `/`
//               → "*/"           → stray closing comment error
//               → letter | '_'   → keyword | identifier | illegal-character error
//               → digit          → number | malformed-number error
//               → symbol char    → symbol (`=` may become `==`)
//               → anything else  → illegal-character error
// ============================================================================

/// Outcome of one scanning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scanned {
    Token(Token),
    Comment,
    Error(LexicalError),
}

/// Scanner for C-minus source code.
///
/// Produces tokens lazily through its [`Iterator`] implementation while accumulating lexical
/// errors and the symbol table. Use [`Lexer::tokenize`] (or [`lex`]) to run it to completion.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// 1-based line of the next unconsumed character
    line: usize,
    errors: Vec<LexicalError>,
    symbols: SymbolTable,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            errors: Vec::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Scan the entire source code.
    ///
    /// The returned token list does not contain the end-of-input sentinel; use
    /// [`ScanResult::parser_input`] to get the sentinel-terminated sequence.
    pub fn tokenize(mut self) -> ScanResult {
        let tokens: Vec<Token> = self.by_ref().collect();
        let eof = Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
            self.line,
        );

        ScanResult {
            tokens,
            errors: self.errors,
            symbols: self.symbols,
            eof,
        }
    }

    /// Lexical errors recorded so far, in detection order.
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Symbol table as built so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    fn lexeme_from(&self, start: usize) -> &'a str {
        &self.source[start..self.current_pos]
    }

    fn token(&self, kind: TokenKind, start: usize, line: usize) -> Scanned {
        Scanned::Token(Token::new(kind, Span::new(start, self.current_pos), line))
    }

    fn error(&self, kind: LexicalErrorKind, start: usize, line: usize) -> Scanned {
        Scanned::Error(LexicalError::new(
            kind,
            self.lexeme_from(start),
            line,
            Span::new(start, self.current_pos),
        ))
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Run one decision procedure. Returns `None` once input is exhausted.
    pub(crate) fn scan_item(&mut self) -> Option<Scanned> {
        self.skip_whitespace();

        let c = self.peek()?;
        let start = self.current_pos;
        let line = self.line;

        let scanned = if c == '/' {
            self.scan_slash(start, line)
        } else if c == '*' && self.peek_next() == Some('/') {
            self.scan_stray_closing_comment(start, line)
        } else if is_ident_start(c) {
            self.scan_identifier(start, line)
        } else if c.is_ascii_digit() {
            self.scan_number(start, line)
        } else if let Some(id) = symbols::from_char(c) {
            self.advance();
            let id = if id == SymbolId::Eq && self.match_char('=') {
                SymbolId::EqEq
            } else {
                id
            };
            self.token(TokenKind::Symbol(id), start, line)
        } else {
            self.advance();
            self.error(LexicalErrorKind::IllegalCharacter, start, line)
        };

        Some(scanned)
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, line: usize) -> Scanned {
        self.eat_while(is_ident_continue);

        // An identifier must be followed by whitespace, a symbol, or end of input. Otherwise the
        // whole run up to the next such boundary is one illegal lexeme.
        if self.peek().is_some_and(|c| !is_whitespace(c) && !symbols::is_symbol_char(c)) {
            self.eat_while(|c| !c.is_whitespace() && !symbols::is_symbol_char(c));
            return self.error(LexicalErrorKind::IllegalCharacter, start, line);
        }

        let spelling = self.lexeme_from(start);
        let kind = match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(spelling.to_string()),
        };
        self.token(kind, start, line)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Produce the next token, recording lexical errors and symbol-table entries on the way.
    fn next(&mut self) -> Option<Token> {
        loop {
            match self.scan_item()? {
                Scanned::Token(token) => {
                    if token.kind.is_name() {
                        self.symbols.insert(token.lexeme());
                    }
                    return Some(token);
                }
                Scanned::Comment => {}
                Scanned::Error(err) => {
                    tracing::debug!(line = err.line, lexeme = %err.lexeme, kind = %err.kind, "lexical error");
                    self.errors.push(err);
                }
            }
        }
    }
}

// ============================================================================
// Scan result
// ============================================================================

/// Everything a full scan produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Tokens in source order, without the end-of-input sentinel.
    pub tokens: Vec<Token>,
    /// Lexical errors in detection order.
    pub errors: Vec<LexicalError>,
    pub symbols: SymbolTable,
    /// The end-of-input sentinel, positioned at the end of the source.
    pub eof: Token,
}

impl ScanResult {
    /// Tokens grouped by the line they start on, in ascending line order.
    pub fn lines(&self) -> BTreeMap<usize, Vec<&Token>> {
        let mut lines: BTreeMap<usize, Vec<&Token>> = BTreeMap::new();
        for token in &self.tokens {
            lines.entry(token.line).or_default().push(token);
        }
        lines
    }

    /// The flattened, left-to-right token sequence terminated by the `$` sentinel.
    pub fn parser_input(&self) -> Vec<Token> {
        let mut input: Vec<Token> = self.lines().into_values().flatten().cloned().collect();
        input.push(self.eof.clone());
        input
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Whitespace recognized between tokens: space, `\t`, `\r`, `\v`, `\f`, `\n`.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C' | '\n')
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to scan a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> ScanResult {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
