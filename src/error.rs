/// Lexical errors.
///
/// Raised by the lexer when the input contains a character sequence that no
/// lexical rule accepts.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a syntax tree from
/// tokens: unexpected or trailing tokens, a premature end of input and
/// unbalanced parentheses. Lexical errors are carried through unchanged.
pub mod parse_error;
/// Internal errors.
///
/// Contract violations detected during evaluation. These never arise from a
/// tree built by the parser and indicate a bug rather than bad user input.
pub mod internal_error;
/// Session errors.
///
/// The union of everything that can go wrong when a line of text is parsed and
/// evaluated in one step.
pub mod calc_error;

pub use calc_error::CalcError;
pub use internal_error::InternalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
