// Declarations: the program root, declaration lists, variable/function declarations, and
// parameter lists.

impl<'a> Parser<'a> {
    /// `Program → Declaration-list $`
    fn program(&mut self) -> ParseNode {
        let declarations = self.declaration_list();
        let eof = self.match_lexeme(crate::lexer::EOF_LEXEME);
        Self::node(NonTerminal::Program, [declarations, eof])
    }

    /// `Declaration-list → Declaration Declaration-list | ε`
    fn declaration_list(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.check_type_specifier() {
            items.push(vec![self.declaration()]);
        }
        Self::nest_list(NonTerminal::DeclarationList, items)
    }

    fn declaration(&mut self) -> ParseNode {
        self.nested(NonTerminal::Declaration, Self::declaration_body)
    }

    /// `Declaration → Declaration-initial Declaration-prime`
    fn declaration_body(&mut self) -> ParseNode {
        let initial = self.declaration_initial();
        let prime = self.declaration_prime();
        Self::node(NonTerminal::Declaration, [initial, prime])
    }

    /// `Declaration-initial → Type-specifier ID`
    fn declaration_initial(&mut self) -> ParseNode {
        let ty = self.type_specifier();
        let name = self.match_class(TokenClass::Identifier);
        Self::node(NonTerminal::DeclarationInitial, [ty, name])
    }

    /// `Declaration-prime → Fun-declaration-prime | Var-declaration-prime`, split on `(`.
    fn declaration_prime(&mut self) -> ParseNode {
        let inner = if self.check_symbol(SymbolId::LParen) {
            self.fun_declaration_prime()
        } else {
            self.var_declaration_prime()
        };
        Self::node(NonTerminal::DeclarationPrime, [inner])
    }

    /// `Var-declaration-prime → ; | [ NUM ] ;`
    fn var_declaration_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::rule(NonTerminal::VarDeclarationPrime);
        if self.check_symbol(SymbolId::LBracket) {
            node.push(self.consume());
            node.push(self.match_class(TokenClass::Number));
            node.push(self.match_symbol(SymbolId::RBracket));
        }
        node.push(self.match_symbol(SymbolId::Semicolon));
        node
    }

    /// `Fun-declaration-prime → ( Params ) Compound-stmt`
    fn fun_declaration_prime(&mut self) -> ParseNode {
        let open = self.match_symbol(SymbolId::LParen);
        let params = self.params();
        let close = self.match_symbol(SymbolId::RParen);
        let body = self.compound_stmt();
        Self::node(NonTerminal::FunDeclarationPrime, [open, params, close, body])
    }

    /// `Type-specifier → int | void`
    fn type_specifier(&mut self) -> ParseNode {
        let leaf = if self.check_type_specifier() {
            self.consume()
        } else {
            self.match_keyword(KeywordId::Int)
        };
        Self::node(NonTerminal::TypeSpecifier, [leaf])
    }

    /// `Params → void | int ID Param-prime Param-list`
    ///
    /// Any lookahead other than `void` takes the `int` alternative, so a missing parameter list
    /// reports `missing int`.
    fn params(&mut self) -> ParseNode {
        if self.check_keyword(KeywordId::Void) {
            let void = self.consume();
            return Self::node(NonTerminal::Params, [void]);
        }

        let int = self.match_keyword(KeywordId::Int);
        let name = self.match_class(TokenClass::Identifier);
        let prime = self.param_prime();
        let rest = self.param_list();
        Self::node(NonTerminal::Params, [int, name, prime, rest])
    }

    /// `Param-list → , Param Param-list | ε`
    fn param_list(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.check_symbol(SymbolId::Comma) {
            let comma = self.consume();
            items.push(vec![comma, self.param()]);
        }
        Self::nest_list(NonTerminal::ParamList, items)
    }

    /// `Param → Declaration-initial Param-prime`
    fn param(&mut self) -> ParseNode {
        let initial = self.declaration_initial();
        let prime = self.param_prime();
        Self::node(NonTerminal::Param, [initial, prime])
    }

    /// `Param-prime → [ ] | ε`
    fn param_prime(&mut self) -> ParseNode {
        if !self.check_symbol(SymbolId::LBracket) {
            return Self::epsilon(NonTerminal::ParamPrime);
        }
        let open = self.consume();
        let close = self.match_symbol(SymbolId::RBracket);
        Self::node(NonTerminal::ParamPrime, [open, close])
    }
}
