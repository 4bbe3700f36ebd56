/// Binary operator evaluation logic.
///
/// Applies the four arithmetic operators with IEEE-754 semantics.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix `+` and `-` operators.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk, the evaluation result type and the handling of
/// empty operand slots.
pub mod core;
