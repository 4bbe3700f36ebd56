use crate::error::{InternalError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents everything that can fail when a line is parsed and evaluated.
pub enum CalcError {
    /// The line is not a valid expression.
    Parse(ParseError),
    /// The tree could not be evaluated.
    Internal(InternalError),
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<InternalError> for CalcError {
    fn from(e: InternalError) -> Self {
        Self::Internal(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Internal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Internal(e) => Some(e),
        }
    }
}
