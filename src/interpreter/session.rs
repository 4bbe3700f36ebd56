use log::debug;

use crate::{
    ast::Ast,
    error::CalcError,
    interpreter::{
        evaluator::core::EvalResult,
        parser::core::{ParseResult, Parser},
    },
};

/// A calculator session holding the previous answer.
///
/// The `ans` register starts at `0.0` and is replaced by the result of every
/// successful evaluation. A failed line leaves it untouched.
///
/// ## Usage
///
/// `Calculator` is created once per interactive session and fed one line at a
/// time. A session is not meant to be shared between threads without outside
/// synchronization.
///
/// ```
/// use anscalc::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.evaluate("5").unwrap(), 5.0);
/// assert_eq!(calc.evaluate("ans * 2").unwrap(), 10.0);
/// assert!(calc.evaluate("ans +").is_err());
/// assert_eq!(calc.ans(), 10.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Calculator {
    ans: f64,
}

impl Calculator {
    /// Creates a session with `ans` set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { ans: 0.0 }
    }

    /// Parses `source` into a syntax tree. Does not touch the session.
    ///
    /// # Errors
    /// Any [`crate::error::ParseError`] raised by the parser.
    pub fn parse(source: &str) -> ParseResult<Ast> {
        Parser::new(source).parse()
    }

    /// Evaluates `ast` against the current `ans`, then stores and returns the
    /// result.
    ///
    /// # Errors
    /// Any [`crate::error::InternalError`] raised by the evaluator, in which
    /// case `ans` is not modified.
    pub fn evaluate_ast(&mut self, ast: &Ast) -> EvalResult<f64> {
        let value = ast.evaluate(self.ans)?;
        debug!("ans {} -> {value}", self.ans);
        self.ans = value;
        Ok(value)
    }

    /// Parses and evaluates one line of source text.
    ///
    /// # Errors
    /// A [`CalcError`] if the line does not parse or cannot be evaluated. `ans`
    /// is left unchanged.
    pub fn evaluate(&mut self, source: &str) -> Result<f64, CalcError> {
        let ast = Self::parse(source)?;
        Ok(self.evaluate_ast(&ast)?)
    }

    /// Returns the current value of the `ans` register.
    #[must_use]
    pub const fn ans(&self) -> f64 {
        self.ans
    }
}
