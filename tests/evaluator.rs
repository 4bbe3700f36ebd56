use anscalc::{
    Calculator,
    ast::{Ast, BinaryOperator::*, Expr, UnaryOperator::*},
    error::InternalError,
};

fn num(text: &str) -> Expr {
    Expr::number(text)
}

#[test]
fn missing_left_operand() {
    let expr = Expr::BinaryOp { op:    Add,
                                left:  None,
                                right: Some(Box::new(num("1"))), };
    assert_eq!(expr.evaluate(0.0), Err(InternalError::NullNode));
}

#[test]
fn missing_right_operand() {
    let expr = Expr::BinaryOp { op:    Div,
                                left:  Some(Box::new(num("1"))),
                                right: None, };
    assert_eq!(expr.evaluate(0.0), Err(InternalError::NullNode));
}

#[test]
fn empty_slot_deep_in_the_tree() {
    let hollow = Expr::UnaryOp { op:      Negate,
                                 operand: None, };
    let expr = Expr::binary(Mul, Expr::binary(Add, num("2"), Expr::Ans), hollow);
    assert_eq!(expr.evaluate(3.0), Err(InternalError::NullNode));

    let expr = Expr::unary(Plus,
                           Expr::BinaryOp { op:    Sub,
                                            left:  Some(Box::new(Expr::Ans)),
                                            right: None, });
    assert_eq!(expr.evaluate(3.0), Err(InternalError::NullNode));
}

#[test]
fn malformed_literal() {
    assert_eq!(num("1.2.3").evaluate(0.0),
               Err(InternalError::MalformedLiteral { text: "1.2.3".to_string() }));
    assert_eq!(Expr::binary(Add, num("1"), num("")).evaluate(0.0),
               Err(InternalError::MalformedLiteral { text: String::new() }));
}

#[test]
fn internal_error_messages() {
    assert_eq!(InternalError::NullNode.to_string(),
               "InternalError: Tried to evaluate an empty node.");
    assert_eq!(num("4e").evaluate(0.0).unwrap_err().to_string(),
               "InternalError: Malformed number literal '4e'.");
}

#[test]
fn broken_tree_leaves_ans_untouched() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("6 * 7").unwrap(), 42.0);

    let broken = Ast::new(Expr::BinaryOp { op:    Add,
                                           left:  Some(Box::new(Expr::Ans)),
                                           right: None, });
    assert_eq!(calc.evaluate_ast(&broken), Err(InternalError::NullNode));
    assert_eq!(calc.ans(), 42.0);

    let malformed = Ast::new(num("1.2.3"));
    assert!(matches!(calc.evaluate_ast(&malformed),
                     Err(InternalError::MalformedLiteral { .. })));
    assert_eq!(calc.ans(), 42.0);
    assert_eq!(calc.evaluate("ans + 1").unwrap(), 43.0);
}
