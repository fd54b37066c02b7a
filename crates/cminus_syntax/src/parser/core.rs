// Parser core types and entrypoint.
//
// This chunk defines the `Parser` state, the `ParseOutcome` it produces, and `Parser::parse`,
// which starts at `Program`.

/// How deep statements and expressions may nest before the parser skips the nested run.
///
/// Counts `Declaration`, `Statement` and `Expression` entries on the current path. Every recursive
/// cycle of the grammar passes through one of them, so this bounds native stack use on input such
/// as thousands of nested parentheses.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Result of parsing: always a complete tree, plus the syntax errors recovered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub tree: ParseNode,
    /// Syntax errors in detection order.
    pub errors: Vec<SyntaxError>,
}

impl ParseOutcome {
    /// Return `true` when no syntax error was recovered.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parser state.
///
/// ## Notes
/// - The state is the cursor, the nesting depth and the error list. The lookahead is always the
///   token at the cursor, and the cursor never moves past the `$` sentinel.
/// - Recovery is insert-and-continue: a missing terminal is recorded and assumed present, and the
///   mismatched lookahead stays available to the next production. Every repetition loop is only
///   entered on a lookahead it consumes, so parsing always reaches `$`.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Nesting entries on the current path; see [`MAX_NESTING_DEPTH`].
    depth: usize,
    /// Sentinel used when the cursor runs off a token slice that lacks a trailing `$`.
    eof: Token,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by [`crate::lexer::ScanResult::parser_input`]. A missing
    ///   trailing `$` sentinel is tolerated.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::new(TokenKind::Eof, Span::new(last.span.end, last.span.end), last.line),
            None => Token::new(TokenKind::Eof, Span::default(), 1),
        };

        Self {
            tokens,
            pos: 0,
            depth: 0,
            eof,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream, starting from `Program`.
    pub fn parse(mut self) -> ParseOutcome {
        let tree = self.program();
        ParseOutcome {
            tree,
            errors: self.errors,
        }
    }
}
