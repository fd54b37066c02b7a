/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`, `consume`)
/// - Lookahead tests (`check_symbol`, `check_keyword`, `check_class`) and FIRST-set tests
/// - The matching primitives `match_lexeme` / `match_class` with insert-and-continue recovery
/// - Rebuilding right-nested list productions from iteratively collected items
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return the lookahead token without consuming it.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Return `true` if the lookahead is the `$` sentinel.
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Move past the lookahead. Never moves past the sentinel.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume the lookahead unconditionally and return its leaf.
    ///
    /// Callers only use this after a lookahead test selected the production.
    fn consume(&mut self) -> ParseNode {
        let leaf = ParseNode::leaf(NodeLabel::token(self.peek()));
        self.advance();
        leaf
    }

    // ========================================================================
    // Lookahead tests
    // ========================================================================

    fn check_symbol(&self, id: SymbolId) -> bool {
        self.peek().kind.is_symbol(id)
    }

    fn check_any_symbol(&self, ids: &[SymbolId]) -> bool {
        ids.iter().any(|id| self.check_symbol(*id))
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Lookahead is `int` or `void`.
    fn check_type_specifier(&self) -> bool {
        self.peek().keyword_id().is_some_and(keywords::is_type_specifier)
    }

    fn check_symbol_category(&self, category: SymbolCategory) -> bool {
        self.peek().symbol_id().is_some_and(|id| symbols::category(id) == category)
    }

    fn check_class(&self, class: TokenClass) -> bool {
        self.peek().class() == class
    }

    /// Lookahead can start a `Statement` (and so continue a `Statement-list`).
    fn starts_statement(&self) -> bool {
        self.check_class(TokenClass::Identifier)
            || self.check_class(TokenClass::Number)
            || self.check_any_symbol(&[SymbolId::LParen, SymbolId::Semicolon, SymbolId::LBrace])
            || [KeywordId::If, KeywordId::For, KeywordId::Return, KeywordId::Break]
                .iter()
                .any(|id| self.check_keyword(*id))
    }

    /// Lookahead can start an `Expression`.
    fn starts_expression(&self) -> bool {
        self.check_class(TokenClass::Identifier)
            || self.check_class(TokenClass::Number)
            || self.check_any_symbol(&[SymbolId::LParen, SymbolId::Plus, SymbolId::Minus])
    }

    // ========================================================================
    // Matching and recovery
    // ========================================================================

    /// Match a terminal by spelling.
    ///
    /// On success the lookahead is consumed and returned as a leaf. Otherwise a
    /// `syntax error, missing <expected>` is recorded and a synthetic leaf for `expected` is
    /// returned **without advancing**: the caller continues as if the terminal had been present.
    fn match_lexeme(&mut self, expected: &str) -> ParseNode {
        if self.peek().lexeme() == expected {
            return self.consume();
        }

        let class = if expected == crate::lexer::EOF_LEXEME {
            TokenClass::EndOfInput
        } else if keywords::from_str(expected).is_some() {
            TokenClass::Keyword
        } else {
            TokenClass::Symbol
        };
        self.missing(class, expected)
    }

    fn match_symbol(&mut self, id: SymbolId) -> ParseNode {
        self.match_lexeme(symbols::as_str(id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> ParseNode {
        self.match_lexeme(keywords::as_str(id))
    }

    /// Match a terminal by token class (identifiers, numbers). Recovery as in `match_lexeme`,
    /// with the class label (`ID`, `NUM`) standing in for the expected spelling.
    fn match_class(&mut self, class: TokenClass) -> ParseNode {
        if self.check_class(class) {
            return self.consume();
        }
        self.missing(class, class.label())
    }

    fn missing(&mut self, class: TokenClass, expected: &str) -> ParseNode {
        let found = self.peek();
        let error = SyntaxError::missing(expected, found.line, found.span);
        tracing::debug!(line = found.line, found = %found, "{error}");
        self.errors.push(error);

        ParseNode::leaf(NodeLabel::Missing {
            class,
            lexeme: expected.to_string(),
        })
    }

    // ========================================================================
    // Nesting limit
    // ========================================================================

    /// Run `parse` one nesting level deeper, or skip the nested run once the limit is reached.
    fn nested(&mut self, nt: NonTerminal, parse: fn(&mut Self) -> ParseNode) -> ParseNode {
        if self.depth >= MAX_NESTING_DEPTH {
            return self.skip_nested(nt);
        }
        self.depth += 1;
        let node = parse(self);
        self.depth -= 1;
        node
    }

    /// Record `syntax error, nesting too deep` and consume a bracket-balanced run of tokens.
    ///
    /// The run ends before an unmatched closer, before a `;` at its outermost level, or at `$`.
    /// Statements and declarations also take that `;`. Skipped tokens stay in the tree as leaves
    /// of `nt`.
    fn skip_nested(&mut self, nt: NonTerminal) -> ParseNode {
        let found = self.peek();
        let error = SyntaxError::nesting_too_deep(found.line, found.span);
        tracing::debug!(line = found.line, found = %found, "{error}");
        self.errors.push(error);

        let mut node = ParseNode::rule(nt);
        let mut open = 0usize;
        while !self.is_at_end() {
            match self.peek().symbol_id() {
                Some(SymbolId::LParen | SymbolId::LBracket | SymbolId::LBrace) => open += 1,
                Some(SymbolId::RParen | SymbolId::RBracket | SymbolId::RBrace) if open == 0 => break,
                Some(SymbolId::RParen | SymbolId::RBracket | SymbolId::RBrace) => open -= 1,
                Some(SymbolId::Semicolon) if open == 0 => break,
                _ => {}
            }
            node.push(self.consume());
        }
        if nt != NonTerminal::Expression && self.check_symbol(SymbolId::Semicolon) {
            node.push(self.consume());
        }
        node
    }

    // ========================================================================
    // Node building
    // ========================================================================

    /// Build an interior node from its ordered children.
    fn node(nt: NonTerminal, children: impl IntoIterator<Item = ParseNode>) -> ParseNode {
        children.into_iter().fold(ParseNode::rule(nt), ParseNode::with)
    }

    /// Build an interior node for an empty production.
    fn epsilon(nt: NonTerminal) -> ParseNode {
        Self::node(nt, [ParseNode::epsilon()])
    }

    /// Rebuild the right-nested shape of `X → item X | ε` from items collected in a loop.
    fn nest_list(nt: NonTerminal, items: Vec<Vec<ParseNode>>) -> ParseNode {
        items.into_iter().rev().fold(Self::epsilon(nt), |tail, item| {
            Self::node(nt, item).with(tail)
        })
    }
}
