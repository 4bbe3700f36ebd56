use serde::Serialize;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, also implied by juxtaposition as in `2(3)`.
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the operator as it is written in source code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
}

impl UnaryOperator {
    /// Returns the operator as it is written in source code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Negate => '-',
        }
    }
}

/// An operand slot of an operator node.
///
/// The parser always fills it. An empty slot only exists in trees assembled by
/// hand and is reported as an error when evaluated.
pub type Child = Option<Box<Expr>>;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its operands. Trees are built once by the parser and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, kept exactly as written.
    Number {
        /// The literal source text, e.g. `1.5e3`.
        text: String,
    },
    /// A reference to the previous answer, written `ans`.
    Ans,
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Child,
        /// Right operand.
        right: Child,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Child,
    },
}

impl Expr {
    /// Creates a number literal node from its source text.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number { text: text.into() }
    }

    /// Creates a binary operation node with both operands present.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Some(Box::new(left)),
                         right: Some(Box::new(right)) }
    }

    /// Creates a prefix operation node with its operand present.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Some(Box::new(operand)) }
    }

    /// Returns the number of nodes in this subtree. Empty slots are not
    /// counted.
    ///
    /// # Example
    /// ```
    /// use anscalc::parse;
    ///
    /// assert_eq!(parse("2(3 + ans)").unwrap().root().node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let children = |child: &Child| child.as_deref().map_or(0, Self::node_count);
        match self {
            Self::Number { .. } | Self::Ans => 1,
            Self::BinaryOp { left, right, .. } => 1 + children(left) + children(right),
            Self::UnaryOp { operand, .. } => 1 + children(operand),
        }
    }
}

/// A complete syntax tree as returned by the parser.
///
/// Serializes as an object whose `root` field holds the top-level expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ast {
    root: Expr,
}

impl Ast {
    /// Wraps `root` as a complete tree.
    #[must_use]
    pub const fn new(root: Expr) -> Self {
        Self { root }
    }

    /// Returns the top-level expression.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }

    /// Consumes the tree and returns its top-level expression.
    #[must_use]
    pub fn into_root(self) -> Expr {
        self.root
    }
}
