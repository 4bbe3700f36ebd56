use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::ast::{Ast, Expr};

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number { text } => {
                let mut node = serializer.serialize_struct("Number", 2)?;
                node.serialize_field("type", "number")?;
                node.serialize_field("value", text)?;
                node.end()
            },
            Self::Ans => {
                let mut node = serializer.serialize_struct("Ans", 1)?;
                node.serialize_field("type", "ans")?;
                node.end()
            },
            Self::BinaryOp { op, left, right } => {
                let mut node = serializer.serialize_struct("BinaryOp", 3)?;
                node.serialize_field("type", &format!("b{}", op.symbol()))?;
                node.serialize_field("left", left)?;
                node.serialize_field("right", right)?;
                node.end()
            },
            Self::UnaryOp { op, operand } => {
                let mut node = serializer.serialize_struct("UnaryOp", 2)?;
                node.serialize_field("type", &format!("u{}", op.symbol()))?;
                node.serialize_field("operand", operand)?;
                node.end()
            },
        }
    }
}

/// Writes `value` as JSON indented by two spaces per nesting level.
fn write_pretty<T: Serialize>(value: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let json = serde_json::to_string_pretty(value).map_err(|_| std::fmt::Error)?;
    f.write_str(&json)
}

/// Formats the subtree as pretty-printed JSON.
///
/// Empty operand slots are written as `null`.
///
/// # Example
/// ```
/// use anscalc::ast::{Expr, UnaryOperator};
///
/// let expr = Expr::UnaryOp { op:      UnaryOperator::Negate,
///                            operand: None, };
/// assert_eq!(expr.to_string(), "{\n  \"type\": \"u-\",\n  \"operand\": null\n}");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pretty(self, f)
    }
}

/// Formats the tree as pretty-printed JSON under a top-level `root` key.
impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pretty(self, f)
    }
}
