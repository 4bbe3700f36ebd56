use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{ParseResult, Subtree, check_depth},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. They are right-associative, so
/// `--x` parses as `-(-x)`, and they bind tighter than every binary operator.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `lexer`: Token source.
/// - `depth`: Number of groups and signs enclosing this expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Subtree> {
    let token = next_operand(lexer)?;
    let op = match token.kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => {
            lexer.putback(token);
            return parse_primary(lexer, depth);
        },
    };
    check_depth(depth + 1, token.position)?;
    let operand = parse_unary(lexer, depth + 1)?;
    Subtree::unary(op, operand, token.position)
}

/// Parses a primary (atomic) expression and any groups juxtaposed to it.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals
/// - `ans`
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := (NUMBER | "ans" | "(" expression ")") ("(" expression ")")*
/// ```
/// # Parameters
/// - `lexer`: Token source positioned at the start of a primary expression.
/// - `depth`: Number of groups and signs enclosing this expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Subtree> {
    let token = next_operand(lexer)?;
    let node = match token.kind {
        TokenKind::Number => Subtree::leaf(Expr::number(token.text)),
        TokenKind::Ans => Subtree::leaf(Expr::Ans),
        TokenKind::LParen => parse_grouping(lexer, &token, depth)?,
        _ => {
            return Err(ParseError::UnexpectedToken { token:    token.text.to_string(),
                                                     position: token.position, });
        },
    };
    parse_juxtaposition(lexer, node, depth)
}

/// Folds parenthesized groups written directly after an expression into
/// implicit multiplications.
///
/// Each group is multiplied onto everything to its left, so `2(3)(4)` parses
/// as `(2 * 3) * 4`.
///
/// Grammar:
/// ```text
///     juxtaposition := primary ("(" expression ")")*
/// ```
/// # Parameters
/// - `lexer`: Token source positioned after a primary expression.
/// - `node`: The expression the groups are multiplied onto.
/// - `depth`: Number of groups and signs enclosing `node`.
///
/// # Returns
/// `node`, with every following group folded in.
fn parse_juxtaposition(lexer: &mut Lexer<'_>,
                       mut node: Subtree,
                       depth: usize)
                       -> ParseResult<Subtree> {
    while let Some(token) = lexer.next()? {
        if token.kind != TokenKind::LParen {
            lexer.putback(token);
            break;
        }
        let group = parse_grouping(lexer, &token, depth)?;
        node = Subtree::binary(BinaryOperator::Mul, node, group, token.position)?;
    }
    Ok(node)
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. Failure to find the closing parenthesis yields
/// `ParseError::UnclosedParen`, pointing at `open`. A group opened more than
/// [`MAX_DEPTH`](crate::interpreter::parser::core::MAX_DEPTH) levels deep
/// yields `ParseError::TooDeep` before its contents are read.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `lexer`: Token source positioned after `(`.
/// - `open`: The opening parenthesis.
/// - `depth`: Number of groups and signs enclosing `open`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(lexer: &mut Lexer<'_>, open: &Token<'_>, depth: usize) -> ParseResult<Subtree> {
    check_depth(depth + 1, open.position)?;
    let expr = parse_additive(lexer, depth + 1)?;
    match lexer.next()? {
        Some(Token { kind: TokenKind::RParen,
                     .. }) => Ok(expr),
        _ => Err(ParseError::UnclosedParen { position: open.position }),
    }
}

/// Takes the next token where an operand must start.
///
/// # Errors
/// `ParseError::UnexpectedEnd` if the input is exhausted.
fn next_operand<'a>(lexer: &mut Lexer<'a>) -> ParseResult<Token<'a>> {
    lexer.next()?
         .ok_or_else(|| ParseError::UnexpectedEnd { position: lexer.source().len() })
}
