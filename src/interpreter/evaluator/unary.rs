use crate::ast::UnaryOperator;

impl UnaryOperator {
    /// Applies the operator to an already evaluated operand.
    ///
    /// Negation subtracts from zero instead of flipping the sign bit, so the
    /// negation of a zero is always `+0.0`.
    ///
    /// # Example
    /// ```
    /// use anscalc::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.apply(2.5), -2.5);
    /// assert!(UnaryOperator::Negate.apply(0.0).is_sign_positive());
    /// assert!(UnaryOperator::Negate.apply(-0.0).is_sign_positive());
    /// assert_eq!(UnaryOperator::Plus.apply(-7.0), -7.0);
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Plus => value,
            Self::Negate => 0.0 - value,
        }
    }
}
