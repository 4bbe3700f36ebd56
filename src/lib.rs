//! # anscalc
//!
//! anscalc is an interactive arithmetic calculator written in Rust.
//! It tokenizes, parses and evaluates arithmetic expressions, remembers the
//! previous answer as `ans`, and can serialize the parsed syntax tree as JSON.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `Ast` wrapper that represent
/// an arithmetic expression as a tree. The tree is built by the parser and
/// traversed by the evaluator and the serializer.
///
/// # Responsibilities
/// - Defines number, `ans`, binary and unary nodes.
/// - Defines the binary and unary operators.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while turning a line of
/// text into a number. Each error carries enough detail, such as the offending
/// token and its column, to be shown to the user as is.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches source offsets for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the pipeline from source text to result.
///
/// This module ties together the lexer, the parser, the evaluator, the
/// serializer and the calculator session.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating user input.
pub mod interpreter;

use crate::{
    ast::Ast,
    error::{InternalError, ParseError},
};
pub use crate::interpreter::session::Calculator;

/// Parses one line of source text into a syntax tree.
///
/// # Errors
/// Returns a [`ParseError`] if the text is not a single well-formed
/// expression. Unrecognized characters are reported as [`ParseError::Lex`].
///
/// # Examples
/// ```
/// use anscalc::{
///     error::{LexError, ParseError},
///     parse,
/// };
///
/// assert!(parse("2(3 + 4)").is_ok());
/// assert!(matches!(parse("(1 + 2"), Err(ParseError::UnclosedParen { .. })));
/// assert!(matches!(parse("1 2"), Err(ParseError::UnexpectedToken { .. })));
/// assert!(matches!(parse("1 +"), Err(ParseError::UnexpectedEnd { .. })));
/// assert!(matches!(parse("1 + @2"),
///                  Err(ParseError::Lex(LexError::UnrecognizedToken { .. }))));
/// ```
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    Calculator::parse(source)
}

/// Evaluates a syntax tree with `ans` standing for the previous answer.
///
/// This is a pure function; use [`Calculator`] to keep `ans` between calls.
///
/// # Errors
/// Returns an [`InternalError`] only for hand-built trees with empty operand
/// slots or malformed literals.
///
/// # Examples
/// ```
/// use anscalc::{evaluate, parse};
///
/// let ast = parse("8 - 3 - 2").unwrap();
/// assert_eq!(evaluate(&ast, 0.0).unwrap(), 3.0);
///
/// let ast = parse("ans / 2").unwrap();
/// assert_eq!(evaluate(&ast, 9.0).unwrap(), 4.5);
/// ```
pub fn evaluate(ast: &Ast, ans: f64) -> Result<f64, InternalError> {
    ast.evaluate(ans)
}

/// Serializes a syntax tree as pretty-printed JSON.
///
/// # Examples
/// ```
/// use anscalc::{parse, serialize};
///
/// let json = serialize(&parse("-ans").unwrap());
/// assert_eq!(json,
///            "{\n  \"root\": {\n    \"type\": \"u-\",\n    \"operand\": {\n      \"type\": \"ans\"\n    }\n  }\n}");
/// ```
#[must_use]
pub fn serialize(ast: &Ast) -> String {
    ast.to_string()
}
