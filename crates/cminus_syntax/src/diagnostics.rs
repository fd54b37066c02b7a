//! Diagnostics produced by the scanner and the parser.
//!
//! Both channels are **non-fatal**: the scanner records a [`LexicalError`] and keeps scanning, the
//! parser records a [`SyntaxError`] and keeps parsing as if the missing terminal were present
//! (or, past the nesting limit, after skipping the nested run).
//! Neither ever aborts, so every input yields complete artifacts.
//!
//! ## Notes
//! - The plain types here carry exactly what the listings print (plus a byte [`Span`]).
//! - [`LexicalReport`] and [`SyntaxReport`] wrap them as `miette` diagnostics with source context
//!   for terminal output (`cminus --check`).

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::span::Span;

// ============================================================================
// Lexical diagnostics
// ============================================================================

/// Category of a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalErrorKind {
    IllegalCharacter,
    MalformedNumber,
    StrayClosingComment,
    UnterminatedComment,
}

impl LexicalErrorKind {
    /// Message text as printed in the lexical error listing.
    pub fn message(self) -> &'static str {
        match self {
            LexicalErrorKind::IllegalCharacter => "Illegal character",
            LexicalErrorKind::MalformedNumber => "Malformed number",
            LexicalErrorKind::StrayClosingComment => "Stray closing comment",
            LexicalErrorKind::UnterminatedComment => "Open comment at EOF",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            LexicalErrorKind::IllegalCharacter => {
                "identifiers are ASCII letters, digits and `_`; other characters are not part of the language"
            }
            LexicalErrorKind::MalformedNumber => {
                "numbers are plain decimal digits without a leading zero and cannot run into letters"
            }
            LexicalErrorKind::StrayClosingComment => "there is no open `/*` comment for this `*/` to close",
            LexicalErrorKind::UnterminatedComment => "close the comment with `*/`",
        }
    }
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A lexical error, anchored at the line where the offending lexeme starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub line: usize,
    pub lexeme: String,
    pub kind: LexicalErrorKind,
    pub span: Span,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            line,
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }
}

/// Renders as a lexical error listing line: `<line>. (<lexeme>, <message>)`.
impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. ({}, {})", self.line, self.lexeme, self.kind)
    }
}

// ============================================================================
// Syntax diagnostics
// ============================================================================

/// What the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// The terminal was absent and was assumed present.
    Missing(String),
    /// Input nested past [`crate::parser::MAX_NESTING_DEPTH`]; the nested run was skipped.
    NestingTooDeep,
}

/// A recovered syntax error.
///
/// ## Notes
/// - `span`/`line` locate the lookahead token that was found instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    pub span: Span,
}

impl SyntaxError {
    pub fn missing(expected: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: SyntaxErrorKind::Missing(expected.into()),
            line,
            span,
        }
    }

    pub fn nesting_too_deep(line: usize, span: Span) -> Self {
        Self {
            kind: SyntaxErrorKind::NestingTooDeep,
            line,
            span,
        }
    }

    fn caption(&self) -> String {
        match &self.kind {
            SyntaxErrorKind::Missing(expected) => format!("expected `{expected}` before this"),
            SyntaxErrorKind::NestingTooDeep => "skipped from here".to_string(),
        }
    }
}

/// Renders as a syntax error listing line.
impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::Missing(expected) => write!(f, "syntax error, missing {expected}"),
            SyntaxErrorKind::NestingTooDeep => f.write_str("syntax error, nesting too deep"),
        }
    }
}

// ============================================================================
// Rich reports
// ============================================================================

/// Shared, named source text for reports.
pub type ReportSource = NamedSource<Arc<str>>;

/// Build the named source once and share it across all reports for a file.
pub fn report_source(file_name: &str, source: &str) -> ReportSource {
    NamedSource::new(file_name, Arc::from(source))
}

/// A lexical error rendered with source context.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: `{lexeme}`")]
#[diagnostic(code(cminus::lexical))]
pub struct LexicalReport {
    kind: LexicalErrorKind,
    lexeme: String,
    #[source_code]
    src: ReportSource,
    #[label("line {line}")]
    span: SourceSpan,
    line: usize,
    #[help]
    help: &'static str,
}

impl LexicalReport {
    pub fn new(error: &LexicalError, src: ReportSource) -> Self {
        Self {
            kind: error.kind,
            lexeme: error.lexeme.clone(),
            src,
            span: error.span.into(),
            line: error.line,
            help: error.kind.hint(),
        }
    }
}

/// A syntax error rendered with source context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cminus::syntax))]
pub struct SyntaxReport {
    message: String,
    #[source_code]
    src: ReportSource,
    #[label("{caption}")]
    span: SourceSpan,
    caption: String,
}

impl SyntaxReport {
    pub fn new(error: &SyntaxError, src: ReportSource) -> Self {
        Self {
            message: error.to_string(),
            src,
            span: error.span.into(),
            caption: error.caption(),
        }
    }
}
