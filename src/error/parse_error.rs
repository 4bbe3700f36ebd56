use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer rejected part of the input.
    Lex(LexError),
    /// Found a token where the grammar does not allow one, including extra
    /// tokens after a complete expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was expected.
    UnexpectedEnd {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    UnclosedParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Parentheses, signs or chained operators nest deeper than
    /// [`crate::interpreter::parser::core::MAX_DEPTH`] levels.
    TooDeep {
        /// Byte offset of the token that opened the level over the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset in the source where the error was detected.
    ///
    /// # Example
    /// ```
    /// use anscalc::parse;
    ///
    /// let err = parse("1 + (2").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEnd { position }
            | Self::UnclosedParen { position }
            | Self::TooDeep { position } => *position,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::UnexpectedToken { token, position } => {
                write!(f,
                       "SyntaxError at column {}: Unexpected token '{token}'.",
                       position + 1)
            },

            Self::UnexpectedEnd { position } => {
                write!(f,
                       "SyntaxError at column {}: Unexpected end of input.",
                       position + 1)
            },

            Self::UnclosedParen { position } => write!(f,
                                                       "SyntaxError at column {}: Parenthesis '(' is never closed.",
                                                       position + 1),

            Self::TooDeep { position } => write!(f,
                                                 "SyntaxError at column {}: Expression is nested too deeply.",
                                                 position + 1),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
