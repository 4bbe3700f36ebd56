use crate::{
    ast::{Ast, Child, Expr},
    error::InternalError,
};

/// Result type used by the evaluator.
///
/// Evaluation of a tree built by the parser always succeeds; the error case
/// only covers hand-built trees that break the node invariants.
pub type EvalResult<T> = Result<T, InternalError>;

impl Expr {
    /// Evaluates the expression and returns the resulting value.
    ///
    /// The walk is pure: `ans` is the value every `ans` reference in the tree
    /// stands for, and nothing is modified.
    ///
    /// # Errors
    /// - `NullNode` if an operator node has an empty operand slot.
    /// - `MalformedLiteral` if a number node holds text that is not a float.
    ///
    /// # Example
    /// ```
    /// use anscalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     error::InternalError,
    /// };
    ///
    /// let expr = Expr::binary(BinaryOperator::Div, Expr::Ans, Expr::number("4"));
    /// assert_eq!(expr.evaluate(10.0).unwrap(), 2.5);
    ///
    /// let broken = Expr::BinaryOp { op:    BinaryOperator::Add,
    ///                               left:  None,
    ///                               right: None, };
    /// assert_eq!(broken.evaluate(0.0), Err(InternalError::NullNode));
    /// ```
    pub fn evaluate(&self, ans: f64) -> EvalResult<f64> {
        match self {
            Self::Number { text } => eval_literal(text),
            Self::Ans => Ok(ans),
            Self::BinaryOp { op, left, right } => {
                let left = eval_child(left, ans)?;
                let right = eval_child(right, ans)?;
                Ok(op.apply(left, right))
            },
            Self::UnaryOp { op, operand } => Ok(op.apply(eval_child(operand, ans)?)),
        }
    }
}

impl Ast {
    /// Evaluates the whole tree with `ans` as the previous answer.
    ///
    /// # Errors
    /// See [`Expr::evaluate`].
    pub fn evaluate(&self, ans: f64) -> EvalResult<f64> {
        self.root().evaluate(ans)
    }
}

/// Parses the text of a number literal.
///
/// The lexer only produces text that parses, so failure means the node was
/// built by hand.
fn eval_literal(text: &str) -> EvalResult<f64> {
    text.parse()
        .map_err(|_| InternalError::MalformedLiteral { text: text.to_string() })
}

fn eval_child(child: &Child, ans: f64) -> EvalResult<f64> {
    child.as_deref()
         .ok_or(InternalError::NullNode)?
         .evaluate(ans)
}
