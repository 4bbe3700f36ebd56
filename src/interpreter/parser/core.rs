use log::debug;

use crate::{
    ast::{Ast, BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::Lexer, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, counted both as open groups and signs
/// on the way down and as the height of the finished tree.
///
/// Evaluation, serialization and dropping all recurse once per tree level, so
/// the limit keeps every later pass within a thread's stack.
pub const MAX_DEPTH: usize = 256;

/// An expression under construction together with the height of its tree.
pub(crate) struct Subtree {
    pub(crate) expr: Expr,
    height:          usize,
}

impl Subtree {
    /// A single-node tree.
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// Joins two subtrees under `op`. `position` is the offset of the operator
    /// token and is reported if the joined tree gets too tall.
    pub(crate) fn binary(op: BinaryOperator,
                         left: Self,
                         right: Self,
                         position: usize)
                         -> ParseResult<Self> {
        let height = 1 + left.height.max(right.height);
        check_depth(height, position)?;
        Ok(Self { expr: Expr::binary(op, left.expr, right.expr),
                  height })
    }

    /// Wraps `operand` in a sign at `position`.
    pub(crate) fn unary(op: UnaryOperator, operand: Self, position: usize) -> ParseResult<Self> {
        let height = 1 + operand.height;
        check_depth(height, position)?;
        Ok(Self { expr: Expr::unary(op, operand.expr),
                  height })
    }
}

/// Fails with `ParseError::TooDeep` once `depth` passes [`MAX_DEPTH`].
pub(crate) const fn check_depth(depth: usize, position: usize) -> ParseResult<()> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { position });
    }
    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `lexer`: Token source positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    Ok(parse_additive(lexer, 0)?.expr)
}

/// Builds a syntax tree from a single line of source text.
///
/// The parser owns its lexer for the duration of the parse. Parsing is
/// all-or-nothing: either the whole input forms one expression, or an error
/// is returned and no tree is produced.
///
/// # Example
/// ```
/// use anscalc::{ast::Expr, interpreter::parser::core::Parser};
///
/// let ast = Parser::new("-ans").parse().unwrap();
/// assert!(matches!(ast.root(), Expr::UnaryOp { .. }));
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Lexer::new(source) }
    }

    /// Parses the whole source as one expression.
    ///
    /// # Errors
    /// - `Lex` if the source contains unrecognized characters.
    /// - `UnexpectedToken` if a token appears where the grammar does not allow
    ///   it, or if input remains after a complete expression.
    /// - `UnexpectedEnd` if the input stops where an operand is required.
    /// - `UnclosedParen` if a `(` is never closed.
    /// - `TooDeep` if the expression nests more than [`MAX_DEPTH`] levels.
    pub fn parse(mut self) -> ParseResult<Ast> {
        let root = parse_expression(&mut self.lexer)?;

        if let Some(token) = self.lexer.next()? {
            return Err(ParseError::UnexpectedToken { token:    token.text.to_string(),
                                                     position: token.position, });
        }

        debug!("parsed {:?} into {} nodes",
               self.lexer.source(),
               root.node_count());
        Ok(Ast::new(root))
    }
}
