#[derive(Debug, Clone, PartialEq, Eq)]
/// Contract violations found while walking a syntax tree.
///
/// Trees produced by the parser never trigger these; they can only come from
/// nodes assembled by hand.
pub enum InternalError {
    /// An operator node is missing one of its operands.
    NullNode,
    /// A number node holds text that is not a floating-point literal.
    MalformedLiteral {
        /// The literal text stored in the node.
        text: String,
    },
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullNode => write!(f, "InternalError: Tried to evaluate an empty node."),
            Self::MalformedLiteral { text } => {
                write!(f, "InternalError: Malformed number literal '{text}'.")
            },
        }
    }
}

impl std::error::Error for InternalError {}
