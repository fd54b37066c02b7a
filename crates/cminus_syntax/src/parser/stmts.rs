// Statements: compound blocks, statement lists, and the statement forms.

impl<'a> Parser<'a> {
    /// `Compound-stmt → { Declaration-list Statement-list }`
    fn compound_stmt(&mut self) -> ParseNode {
        let open = self.match_symbol(SymbolId::LBrace);
        let declarations = self.declaration_list();
        let statements = self.statement_list();
        let close = self.match_symbol(SymbolId::RBrace);
        Self::node(NonTerminal::CompoundStmt, [open, declarations, statements, close])
    }

    /// `Statement-list → Statement Statement-list | ε`
    fn statement_list(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.starts_statement() {
            items.push(vec![self.statement()]);
        }
        Self::nest_list(NonTerminal::StatementList, items)
    }

    fn statement(&mut self) -> ParseNode {
        self.nested(NonTerminal::Statement, Self::statement_body)
    }

    /// `Statement → Expression-stmt | Compound-stmt | Selection-stmt | Iteration-stmt | Return-stmt`
    fn statement_body(&mut self) -> ParseNode {
        let inner = match self.peek().keyword_id() {
            Some(KeywordId::If) => self.selection_stmt(),
            Some(KeywordId::For) => self.iteration_stmt(),
            Some(KeywordId::Return) => self.return_stmt(),
            _ if self.check_symbol(SymbolId::LBrace) => self.compound_stmt(),
            _ => self.expression_stmt(),
        };
        Self::node(NonTerminal::Statement, [inner])
    }

    /// `Expression-stmt → break ; | ; | Expression ;`
    fn expression_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::rule(NonTerminal::ExpressionStmt);
        if self.check_keyword(KeywordId::Break) {
            node.push(self.consume());
        } else if !self.check_symbol(SymbolId::Semicolon) {
            node.push(self.expression());
        }
        node.push(self.match_symbol(SymbolId::Semicolon));
        node
    }

    /// `Selection-stmt → if ( Expression ) Statement Else-stmt`
    fn selection_stmt(&mut self) -> ParseNode {
        let kw = self.match_keyword(KeywordId::If);
        let open = self.match_symbol(SymbolId::LParen);
        let condition = self.expression();
        let close = self.match_symbol(SymbolId::RParen);
        let then_branch = self.statement();
        let else_branch = self.else_stmt();
        Self::node(
            NonTerminal::SelectionStmt,
            [kw, open, condition, close, then_branch, else_branch],
        )
    }

    /// `Else-stmt → else Statement | ε`
    fn else_stmt(&mut self) -> ParseNode {
        if !self.check_keyword(KeywordId::Else) {
            return Self::epsilon(NonTerminal::ElseStmt);
        }
        let kw = self.consume();
        let branch = self.statement();
        Self::node(NonTerminal::ElseStmt, [kw, branch])
    }

    /// `Iteration-stmt → for ( Expression ; Expression ; Expression ) Compound-stmt`
    fn iteration_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::rule(NonTerminal::IterationStmt);
        node.push(self.match_keyword(KeywordId::For));
        node.push(self.match_symbol(SymbolId::LParen));
        node.push(self.expression());
        node.push(self.match_symbol(SymbolId::Semicolon));
        node.push(self.expression());
        node.push(self.match_symbol(SymbolId::Semicolon));
        node.push(self.expression());
        node.push(self.match_symbol(SymbolId::RParen));
        node.push(self.compound_stmt());
        node
    }

    /// `Return-stmt → return Return-stmt-prime`
    fn return_stmt(&mut self) -> ParseNode {
        let kw = self.match_keyword(KeywordId::Return);
        let prime = self.return_stmt_prime();
        Self::node(NonTerminal::ReturnStmt, [kw, prime])
    }

    /// `Return-stmt-prime → ; | Expression ;`
    fn return_stmt_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::rule(NonTerminal::ReturnStmtPrime);
        if !self.check_symbol(SymbolId::Semicolon) {
            node.push(self.expression());
        }
        node.push(self.match_symbol(SymbolId::Semicolon));
        node
    }
}
