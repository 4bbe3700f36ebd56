use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::{
            core::{ParseResult, Subtree},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. `8 - 3 - 2` parses
/// as `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `lexer`: Token source.
/// - `depth`: Number of groups and signs enclosing this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub(crate) fn parse_additive(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Subtree> {
    let mut left = parse_multiplicative(lexer, depth)?;
    while let Some(token) = lexer.next()? {
        match token_to_binary_operator(token.kind) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => {
                let right = parse_multiplicative(lexer, depth)?;
                left = Subtree::binary(op, left, right, token.position)?;
            },
            _ => {
                lexer.putback(token);
                break;
            },
        }
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `lexer`: Token source.
/// - `depth`: Number of groups and signs enclosing this expression.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub(crate) fn parse_multiplicative(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Subtree> {
    let mut left = parse_unary(lexer, depth)?;
    while let Some(token) = lexer.next()? {
        match token_to_binary_operator(token.kind) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => {
                let right = parse_unary(lexer, depth)?;
                left = Subtree::binary(op, left, right, token.position)?;
            },
            _ => {
                lexer.putback(token);
                break;
            },
        }
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is `+`, `-`, `*` or `/`, otherwise
/// `None`.
///
/// # Example
/// ```
/// use anscalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
