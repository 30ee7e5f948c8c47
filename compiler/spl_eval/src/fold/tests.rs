#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use pretty_assertions::assert_eq;
use spl_parse::{parse_expression, parse_sentence};

fn folded(source: &str) -> Expr {
    let mut expr = parse_expression(source).unwrap();
    fold_expr(&mut expr);
    expr
}

#[test]
fn constant_subtrees_collapse() {
    let expr = folded("the sum of a big cat and the square of a pig");
    assert_eq!(expr.kind, ExprKind::Constant(BigInt::from(3)));
}

#[test]
fn folding_keeps_the_span() {
    let mut expr = parse_expression("twice a big cat").unwrap();
    let span = expr.span;
    assert_eq!(fold_expr(&mut expr), 2);
    assert_eq!(expr.span, span);
    assert_eq!(expr.kind, ExprKind::Constant(BigInt::from(4)));
}

#[test]
fn runtime_operands_stop_folding_at_their_parent() {
    let expr = folded("the sum of me and the product of a cat and a big cat");
    let ExprKind::Binary { left, right, .. } = expr.kind else {
        panic!("expected the sum to survive, got {:?}", expr.kind);
    };
    assert_eq!(left.kind, ExprKind::FirstPerson);
    assert_eq!(right.kind, ExprKind::Constant(BigInt::from(2)));
}

#[test]
fn failing_subtrees_are_not_folded() {
    let expr = folded("the sum of a cat and the quotient between a pig and nothing");
    let ExprKind::Binary { left, right, .. } = expr.kind else {
        panic!("expected the sum to survive, got {:?}", expr.kind);
    };
    assert_eq!(left.kind, ExprKind::Constant(BigInt::from(1)));
    let ExprKind::Binary { left: a, right: b, .. } = right.kind else {
        panic!("expected the quotient to survive");
    };
    assert_eq!(a.kind, ExprKind::Constant(BigInt::from(-1)));
    assert_eq!(b.kind, ExprKind::Constant(BigInt::from(0)));
}

#[test]
fn questions_fold_both_sides() {
    let mut sentence = parse_sentence("Is a cat as good as the square root of a big big cat?").unwrap();
    assert_eq!(fold_sentence(&mut sentence), 3);
    let SentenceKind::Question(q) = sentence.kind else {
        panic!("expected question");
    };
    assert_eq!(q.first.kind, ExprKind::Constant(BigInt::from(1)));
    assert_eq!(q.second.kind, ExprKind::Constant(BigInt::from(2)));
}

#[test]
fn small_factorials_fold() {
    let expr = folded("the factorial of a big big cat");
    assert_eq!(expr.kind, ExprKind::Constant(BigInt::from(24)));
}

#[test]
fn huge_factorials_wait_for_run_time() {
    let expr = folded("the factorial of the cube of the cube of a big big big big big cat");
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected the factorial to survive, got {:?}", expr.kind);
    };
    assert_eq!(op, UnaryOp::Factorial);
    assert_eq!(
        operand.kind,
        ExprKind::Constant(BigInt::from(1u64 << 45))
    );
}

#[test]
fn wide_results_wait_for_run_time() {
    let source = format!("{}a big big big big big cat", "the square of ".repeat(10));
    let expr = folded(&source);
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected the outer square to survive, got {:?}", expr.kind);
    };
    assert_eq!(op, UnaryOp::Square);
    let ExprKind::Constant(value) = operand.kind else {
        panic!("expected the inner squares to fold");
    };
    assert_eq!(value.bits(), 2561);
}
