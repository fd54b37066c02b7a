//! Parse tree produced by the predictive parser.
//!
//! The tree is concrete: every grammar production that fires becomes an interior node labelled
//! with its nonterminal, every consumed (or recovered) terminal becomes a leaf, and empty
//! productions get a single `epsilon` leaf. Nothing is simplified away.
//!
//! ## Notes
//! - A node exclusively owns its children.
//! - Rendering and dropping are iterative, so very long statement or declaration lists (which
//!   nest to the right) do not recurse once per list element.

use std::fmt;

use crate::lexer::{Token, TokenClass};
use cminus_core::lang::grammar::{self, NonTerminal};

/// Label of a parse tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeLabel {
    /// Interior node for a grammar production.
    Rule(NonTerminal),
    /// A terminal consumed from the input.
    Token { class: TokenClass, lexeme: String },
    /// A terminal the parser assumed was omitted; see `Parser::match_lexeme`.
    Missing { class: TokenClass, lexeme: String },
    /// The empty production.
    Epsilon,
}

impl NodeLabel {
    pub fn token(token: &Token) -> Self {
        NodeLabel::Token {
            class: token.class(),
            lexeme: token.lexeme().to_string(),
        }
    }
}

/// Leaves render as `(KIND, lexeme)`, except the end-of-input sentinel which renders as `$`.
impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Rule(nt) => f.write_str(grammar::as_str(*nt)),
            NodeLabel::Token { class, lexeme } | NodeLabel::Missing { class, lexeme } => {
                if *class == TokenClass::EndOfInput {
                    f.write_str(lexeme)
                } else {
                    write!(f, "({class}, {lexeme})")
                }
            }
            NodeLabel::Epsilon => f.write_str("epsilon"),
        }
    }
}

/// A labelled tree node with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    label: NodeLabel,
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create an interior node with no children yet.
    pub fn rule(nt: NonTerminal) -> Self {
        Self::leaf(NodeLabel::Rule(nt))
    }

    pub fn leaf(label: NodeLabel) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    pub fn epsilon() -> Self {
        Self::leaf(NodeLabel::Epsilon)
    }

    /// Builder-style child append.
    pub fn with(mut self, child: ParseNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn label(&self) -> &NodeLabel {
        &self.label
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// The nonterminal of an interior node.
    pub fn nonterminal(&self) -> Option<NonTerminal> {
        match self.label {
            NodeLabel::Rule(nt) => Some(nt),
            _ => None,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        self.label == NodeLabel::Epsilon
    }

    /// Pre-order traversal over this node and all descendants.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// First node (pre-order) labelled with `nt`.
    pub fn find(&self, nt: NonTerminal) -> Option<&ParseNode> {
        self.preorder().find(|node| node.nonterminal() == Some(nt))
    }

    /// Lexemes of consumed terminals, left to right. Recovered (missing) leaves are skipped.
    pub fn consumed_lexemes(&self) -> Vec<&str> {
        self.preorder()
            .filter_map(|node| match &node.label {
                NodeLabel::Token { lexeme, .. } => Some(lexeme.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render the tree with box-drawing connectors, one node per line.
    ///
    /// ## Notes
    /// - The root is printed unprefixed. Every other line is `prefix + connector + label`, where
    ///   the prefix gains `"│   "` under a non-last ancestor and `"    "` under a last one; the
    ///   root counts as a last ancestor.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // (node, prefix, is_last, is_root)
        let mut stack: Vec<(&ParseNode, String, bool, bool)> = vec![(self, String::new(), true, true)];

        while let Some((node, prefix, is_last, is_root)) = stack.pop() {
            if !is_root {
                out.push_str(&prefix);
                out.push_str(if is_last { "└── " } else { "├── " });
            }
            out.push_str(&node.label.to_string());
            out.push('\n');

            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            let count = node.children.len();
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == count, false));
            }
        }

        out
    }
}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Iterator returned by [`ParseNode::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(lexeme: &str) -> ParseNode {
        ParseNode::leaf(NodeLabel::Token {
            class: TokenClass::Symbol,
            lexeme: lexeme.to_string(),
        })
    }

    #[test]
    fn test_render_single_node() {
        assert_eq!(ParseNode::rule(NonTerminal::Program).render(), "Program\n");
    }

    #[test]
    fn test_render_connectors_and_prefixes() {
        let tree = ParseNode::rule(NonTerminal::Program)
            .with(
                ParseNode::rule(NonTerminal::DeclarationList)
                    .with(sym(";"))
                    .with(ParseNode::epsilon()),
            )
            .with(ParseNode::leaf(NodeLabel::Token {
                class: TokenClass::EndOfInput,
                lexeme: "$".to_string(),
            }));

        let expected = "\
Program
    ├── Declaration-list
    │   ├── (SYMBOL, ;)
    │   └── epsilon
    └── $
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn test_missing_leaf_renders_like_a_token() {
        let missing = NodeLabel::Missing {
            class: TokenClass::Symbol,
            lexeme: ")".to_string(),
        };
        assert_eq!(missing.to_string(), "(SYMBOL, ))");
    }

    #[test]
    fn test_preorder_and_find() {
        let tree = ParseNode::rule(NonTerminal::Expression)
            .with(sym("("))
            .with(ParseNode::rule(NonTerminal::B).with(sym("=")))
            .with(sym(")"));
        assert_eq!(tree.consumed_lexemes(), ["(", "=", ")"]);
        assert_eq!(tree.find(NonTerminal::B).map(|n| n.children().len()), Some(1));
        assert!(tree.find(NonTerminal::H).is_none());
    }

    #[test]
    fn test_deep_tree_drops_without_recursion() {
        let mut node = ParseNode::epsilon();
        for _ in 0..200_000 {
            node = ParseNode::rule(NonTerminal::StatementList).with(node);
        }
        assert_eq!(node.preorder().count(), 200_001);
        drop(node);
    }
}
