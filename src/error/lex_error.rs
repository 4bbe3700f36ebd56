#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// The input at `position` matches no lexical rule.
    UnrecognizedToken {
        /// The offending source text.
        token:    String,
        /// Byte offset of the offending text in the source.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, position } => {
                write!(f,
                       "SyntaxError at column {}: Unrecognized token '{token}'.",
                       position + 1)
            },
        }
    }
}

impl std::error::Error for LexError {}
