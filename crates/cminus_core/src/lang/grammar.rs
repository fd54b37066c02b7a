//! Names of the grammar nonterminals.
//!
//! Parse tree interior nodes are labelled with these names, so the spellings here are part of
//! the parse tree artifact format.
//!
//! ## Notes
//! - The expression grammar comes in three flavours per precedence level: a plain form, a
//!   `-prime` form used after the caller already consumed a leading identifier, and a `-zegond`
//!   form used when the expression is known *not* to start with an identifier. See [`Lead`].
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::grammar::{self, Lead, NonTerminal};
//!
//! assert_eq!(grammar::as_str(NonTerminal::DeclarationList), "Declaration-list");
//! assert_eq!(NonTerminal::term(Lead::Zegond), NonTerminal::TermZegond);
//! ```

/// Grammar nonterminals, in the order the grammar introduces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Program,
    DeclarationList,
    Declaration,
    DeclarationInitial,
    DeclarationPrime,
    VarDeclarationPrime,
    FunDeclarationPrime,
    TypeSpecifier,
    Params,
    ParamList,
    Param,
    ParamPrime,
    CompoundStmt,
    StatementList,
    Statement,
    ExpressionStmt,
    SelectionStmt,
    ElseStmt,
    IterationStmt,
    ReturnStmt,
    ReturnStmtPrime,
    Expression,
    B,
    H,
    SimpleExpressionZegond,
    SimpleExpressionPrime,
    C,
    Relop,
    AdditiveExpression,
    AdditiveExpressionPrime,
    AdditiveExpressionZegond,
    D,
    Addop,
    Term,
    TermPrime,
    TermZegond,
    G,
    SignedFactor,
    SignedFactorPrime,
    SignedFactorZegond,
    Factor,
    VarCallPrime,
    VarPrime,
    FactorPrime,
    FactorZegond,
    Args,
    ArgList,
    ArgListPrime,
}

/// How an expression level is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lead {
    /// Nothing consumed yet; any factor may follow.
    Plain,
    /// The caller already consumed the leading identifier.
    Prime,
    /// Nothing consumed yet and the lookahead is not an identifier.
    Zegond,
}

/// Every nonterminal, in declaration order.
pub const NONTERMINALS: &[NonTerminal] = &[
    NonTerminal::Program,
    NonTerminal::DeclarationList,
    NonTerminal::Declaration,
    NonTerminal::DeclarationInitial,
    NonTerminal::DeclarationPrime,
    NonTerminal::VarDeclarationPrime,
    NonTerminal::FunDeclarationPrime,
    NonTerminal::TypeSpecifier,
    NonTerminal::Params,
    NonTerminal::ParamList,
    NonTerminal::Param,
    NonTerminal::ParamPrime,
    NonTerminal::CompoundStmt,
    NonTerminal::StatementList,
    NonTerminal::Statement,
    NonTerminal::ExpressionStmt,
    NonTerminal::SelectionStmt,
    NonTerminal::ElseStmt,
    NonTerminal::IterationStmt,
    NonTerminal::ReturnStmt,
    NonTerminal::ReturnStmtPrime,
    NonTerminal::Expression,
    NonTerminal::B,
    NonTerminal::H,
    NonTerminal::SimpleExpressionZegond,
    NonTerminal::SimpleExpressionPrime,
    NonTerminal::C,
    NonTerminal::Relop,
    NonTerminal::AdditiveExpression,
    NonTerminal::AdditiveExpressionPrime,
    NonTerminal::AdditiveExpressionZegond,
    NonTerminal::D,
    NonTerminal::Addop,
    NonTerminal::Term,
    NonTerminal::TermPrime,
    NonTerminal::TermZegond,
    NonTerminal::G,
    NonTerminal::SignedFactor,
    NonTerminal::SignedFactorPrime,
    NonTerminal::SignedFactorZegond,
    NonTerminal::Factor,
    NonTerminal::VarCallPrime,
    NonTerminal::VarPrime,
    NonTerminal::FactorPrime,
    NonTerminal::FactorZegond,
    NonTerminal::Args,
    NonTerminal::ArgList,
    NonTerminal::ArgListPrime,
];

/// Return the label used for a nonterminal in the parse tree.
pub fn as_str(nt: NonTerminal) -> &'static str {
    match nt {
        NonTerminal::Program => "Program",
        NonTerminal::DeclarationList => "Declaration-list",
        NonTerminal::Declaration => "Declaration",
        NonTerminal::DeclarationInitial => "Declaration-initial",
        NonTerminal::DeclarationPrime => "Declaration-prime",
        NonTerminal::VarDeclarationPrime => "Var-declaration-prime",
        NonTerminal::FunDeclarationPrime => "Fun-declaration-prime",
        NonTerminal::TypeSpecifier => "Type-specifier",
        NonTerminal::Params => "Params",
        NonTerminal::ParamList => "Param-list",
        NonTerminal::Param => "Param",
        NonTerminal::ParamPrime => "Param-prime",
        NonTerminal::CompoundStmt => "Compound-stmt",
        NonTerminal::StatementList => "Statement-list",
        NonTerminal::Statement => "Statement",
        NonTerminal::ExpressionStmt => "Expression-stmt",
        NonTerminal::SelectionStmt => "Selection-stmt",
        NonTerminal::ElseStmt => "Else-stmt",
        NonTerminal::IterationStmt => "Iteration-stmt",
        NonTerminal::ReturnStmt => "Return-stmt",
        NonTerminal::ReturnStmtPrime => "Return-stmt-prime",
        NonTerminal::Expression => "Expression",
        NonTerminal::B => "B",
        NonTerminal::H => "H",
        NonTerminal::SimpleExpressionZegond => "Simple-expression-zegond",
        NonTerminal::SimpleExpressionPrime => "Simple-expression-prime",
        NonTerminal::C => "C",
        NonTerminal::Relop => "Relop",
        NonTerminal::AdditiveExpression => "Additive-expression",
        NonTerminal::AdditiveExpressionPrime => "Additive-expression-prime",
        NonTerminal::AdditiveExpressionZegond => "Additive-expression-zegond",
        NonTerminal::D => "D",
        NonTerminal::Addop => "Addop",
        NonTerminal::Term => "Term",
        NonTerminal::TermPrime => "Term-prime",
        NonTerminal::TermZegond => "Term-zegond",
        NonTerminal::G => "G",
        NonTerminal::SignedFactor => "Signed-factor",
        NonTerminal::SignedFactorPrime => "Signed-factor-prime",
        NonTerminal::SignedFactorZegond => "Signed-factor-zegond",
        NonTerminal::Factor => "Factor",
        NonTerminal::VarCallPrime => "Var-call-prime",
        NonTerminal::VarPrime => "Var-prime",
        NonTerminal::FactorPrime => "Factor-prime",
        NonTerminal::FactorZegond => "Factor-zegond",
        NonTerminal::Args => "Args",
        NonTerminal::ArgList => "Arg-list",
        NonTerminal::ArgListPrime => "Arg-list-prime",
    }
}

/// Resolve a parse tree label back to its nonterminal.
pub fn from_str(s: &str) -> Option<NonTerminal> {
    NONTERMINALS.iter().copied().find(|nt| as_str(*nt) == s)
}

impl NonTerminal {
    /// Additive level for the given lead. There is no plain simple-expression; relational
    /// operands use [`NonTerminal::AdditiveExpression`] directly.
    pub fn simple_expression(lead: Lead) -> Option<NonTerminal> {
        match lead {
            Lead::Plain => None,
            Lead::Prime => Some(NonTerminal::SimpleExpressionPrime),
            Lead::Zegond => Some(NonTerminal::SimpleExpressionZegond),
        }
    }

    pub fn additive_expression(lead: Lead) -> NonTerminal {
        match lead {
            Lead::Plain => NonTerminal::AdditiveExpression,
            Lead::Prime => NonTerminal::AdditiveExpressionPrime,
            Lead::Zegond => NonTerminal::AdditiveExpressionZegond,
        }
    }

    pub fn term(lead: Lead) -> NonTerminal {
        match lead {
            Lead::Plain => NonTerminal::Term,
            Lead::Prime => NonTerminal::TermPrime,
            Lead::Zegond => NonTerminal::TermZegond,
        }
    }

    pub fn signed_factor(lead: Lead) -> NonTerminal {
        match lead {
            Lead::Plain => NonTerminal::SignedFactor,
            Lead::Prime => NonTerminal::SignedFactorPrime,
            Lead::Zegond => NonTerminal::SignedFactorZegond,
        }
    }

    pub fn factor(lead: Lead) -> NonTerminal {
        match lead {
            Lead::Plain => NonTerminal::Factor,
            Lead::Prime => NonTerminal::FactorPrime,
            Lead::Zegond => NonTerminal::FactorZegond,
        }
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}
