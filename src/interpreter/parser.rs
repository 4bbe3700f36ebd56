/// Core parsing logic.
///
/// Holds the [`core::Parser`] entry point, the shared result type and the
/// top-level expression rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels as
/// left-associative folds.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix signs, literals, `ans`, parenthesized groups and implicit
/// multiplication by juxtaposition.
pub mod unary;
