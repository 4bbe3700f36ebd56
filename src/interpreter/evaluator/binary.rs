use crate::ast::BinaryOperator;

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// Division by zero is not an error; it yields an infinity or NaN as IEEE
    /// arithmetic prescribes.
    ///
    /// # Example
    /// ```
    /// use anscalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), 5.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}
