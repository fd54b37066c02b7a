// Expressions.
//
// Each precedence level is written once and parameterized by a `Lead`:
// - `Lead::Plain`: an operand of a binary operator; any factor may follow.
// - `Lead::Prime`: the caller already consumed the leading identifier (`-prime` nonterminals).
// - `Lead::Zegond`: an expression that does not start with an identifier (`-zegond` nonterminals).
//
// The lead only changes the node labels and the factor level; relational, additive and
// multiplicative tails (`C`, `D`, `G`) are shared.

impl<'a> Parser<'a> {
    fn expression(&mut self) -> ParseNode {
        self.nested(NonTerminal::Expression, Self::expression_body)
    }

    /// `Expression → ID B | Simple-expression-zegond`
    fn expression_body(&mut self) -> ParseNode {
        if !self.check_class(TokenClass::Identifier) {
            let inner = self.simple_expression(Lead::Zegond);
            return Self::node(NonTerminal::Expression, [inner]);
        }
        let name = self.consume();
        let b = self.b();
        Self::node(NonTerminal::Expression, [name, b])
    }

    /// `B → = Expression | [ Expression ] H | Simple-expression-prime`
    fn b(&mut self) -> ParseNode {
        if self.check_symbol(SymbolId::Eq) {
            let assign = self.consume();
            let value = self.expression();
            return Self::node(NonTerminal::B, [assign, value]);
        }
        if self.check_symbol(SymbolId::LBracket) {
            let open = self.consume();
            let index = self.expression();
            let close = self.match_symbol(SymbolId::RBracket);
            let h = self.h();
            return Self::node(NonTerminal::B, [open, index, close, h]);
        }
        let inner = self.simple_expression(Lead::Prime);
        Self::node(NonTerminal::B, [inner])
    }

    /// `H → = Expression | G D C`
    fn h(&mut self) -> ParseNode {
        if self.check_symbol(SymbolId::Eq) {
            let assign = self.consume();
            let value = self.expression();
            return Self::node(NonTerminal::H, [assign, value]);
        }
        let g = self.g();
        let d = self.d();
        let c = self.c();
        Self::node(NonTerminal::H, [g, d, c])
    }

    /// `Simple-expression-{prime,zegond} → Additive-expression-{prime,zegond} C`
    fn simple_expression(&mut self, lead: Lead) -> ParseNode {
        let Some(nt) = NonTerminal::simple_expression(lead) else {
            // Relational operands stop at the additive level.
            return self.additive_expression(lead);
        };
        let additive = self.additive_expression(lead);
        let c = self.c();
        Self::node(nt, [additive, c])
    }

    /// `C → Relop Additive-expression | ε`
    fn c(&mut self) -> ParseNode {
        if !self.check_symbol_category(SymbolCategory::Relational) {
            return Self::epsilon(NonTerminal::C);
        }
        let relop = Self::node(NonTerminal::Relop, [self.consume()]);
        let rhs = self.additive_expression(Lead::Plain);
        Self::node(NonTerminal::C, [relop, rhs])
    }

    /// `Additive-expression* → Term* D`
    fn additive_expression(&mut self, lead: Lead) -> ParseNode {
        let term = self.term(lead);
        let d = self.d();
        Self::node(NonTerminal::additive_expression(lead), [term, d])
    }

    /// `D → Addop Term D | ε`
    fn d(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.check_any_symbol(&[SymbolId::Plus, SymbolId::Minus]) {
            let addop = Self::node(NonTerminal::Addop, [self.consume()]);
            items.push(vec![addop, self.term(Lead::Plain)]);
        }
        Self::nest_list(NonTerminal::D, items)
    }

    /// `Term* → Signed-factor* G`
    fn term(&mut self, lead: Lead) -> ParseNode {
        let factor = self.signed_factor(lead);
        let g = self.g();
        Self::node(NonTerminal::term(lead), [factor, g])
    }

    /// `G → * Signed-factor G | / Signed-factor G | ε`
    fn g(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.check_any_symbol(&[SymbolId::Star, SymbolId::Slash]) {
            let op = self.consume();
            items.push(vec![op, self.signed_factor(Lead::Plain)]);
        }
        Self::nest_list(NonTerminal::G, items)
    }

    /// `Signed-factor → + Factor | - Factor | Factor`, with `Signed-factor-zegond` ending in
    /// `Factor-zegond` and `Signed-factor-prime → Factor-prime`.
    fn signed_factor(&mut self, lead: Lead) -> ParseNode {
        let nt = NonTerminal::signed_factor(lead);
        if lead != Lead::Prime && self.check_any_symbol(&[SymbolId::Plus, SymbolId::Minus]) {
            let sign = self.consume();
            let factor = self.factor(Lead::Plain);
            return Self::node(nt, [sign, factor]);
        }
        let factor = self.factor(lead);
        Self::node(nt, [factor])
    }

    /// `Factor → ( Expression ) | ID Var-call-prime | NUM`
    /// `Factor-zegond → ( Expression ) | NUM`
    /// `Factor-prime → ( Args ) | ε`
    fn factor(&mut self, lead: Lead) -> ParseNode {
        let nt = NonTerminal::factor(lead);
        if lead == Lead::Prime {
            if !self.check_symbol(SymbolId::LParen) {
                return Self::epsilon(nt);
            }
            return self.call_args(nt);
        }
        if self.check_symbol(SymbolId::LParen) {
            return self.parenthesized(nt);
        }
        if lead == Lead::Plain && self.check_class(TokenClass::Identifier) {
            let name = self.consume();
            let call = self.var_call_prime();
            return Self::node(nt, [name, call]);
        }
        let num = self.match_class(TokenClass::Number);
        Self::node(nt, [num])
    }

    /// `Var-call-prime → ( Args ) | Var-prime`
    fn var_call_prime(&mut self) -> ParseNode {
        if self.check_symbol(SymbolId::LParen) {
            return self.call_args(NonTerminal::VarCallPrime);
        }
        let var = self.var_prime();
        Self::node(NonTerminal::VarCallPrime, [var])
    }

    /// `Var-prime → [ Expression ] | ε`
    fn var_prime(&mut self) -> ParseNode {
        if !self.check_symbol(SymbolId::LBracket) {
            return Self::epsilon(NonTerminal::VarPrime);
        }
        let open = self.consume();
        let index = self.expression();
        let close = self.match_symbol(SymbolId::RBracket);
        Self::node(NonTerminal::VarPrime, [open, index, close])
    }

    /// `nt → ( Expression )`, entered on `(`.
    fn parenthesized(&mut self, nt: NonTerminal) -> ParseNode {
        let open = self.consume();
        let inner = self.expression();
        let close = self.match_symbol(SymbolId::RParen);
        Self::node(nt, [open, inner, close])
    }

    /// `nt → ( Args )`, entered on `(`.
    fn call_args(&mut self, nt: NonTerminal) -> ParseNode {
        let open = self.consume();
        let args = self.args();
        let close = self.match_symbol(SymbolId::RParen);
        Self::node(nt, [open, args, close])
    }

    /// `Args → Arg-list | ε`
    fn args(&mut self) -> ParseNode {
        if !self.starts_expression() {
            return Self::epsilon(NonTerminal::Args);
        }
        let list = self.arg_list();
        Self::node(NonTerminal::Args, [list])
    }

    /// `Arg-list → Expression Arg-list-prime`
    fn arg_list(&mut self) -> ParseNode {
        let first = self.expression();
        let rest = self.arg_list_prime();
        Self::node(NonTerminal::ArgList, [first, rest])
    }

    /// `Arg-list-prime → , Expression Arg-list-prime | ε`
    fn arg_list_prime(&mut self) -> ParseNode {
        let mut items = Vec::new();
        while self.check_symbol(SymbolId::Comma) {
            let comma = self.consume();
            items.push(vec![comma, self.expression()]);
        }
        Self::nest_list(NonTerminal::ArgListPrime, items)
    }
}
