#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn int(v: i64) -> BigInt {
    BigInt::from(v)
}

fn unary(op: UnaryOp, v: i64) -> EvalResult<BigInt> {
    evaluate_unary(op, &int(v))
}

fn binary(op: BinaryOp, a: i64, b: i64) -> EvalResult<BigInt> {
    evaluate_binary(op, &int(a), &int(b))
}

#[test]
fn noun_phrases_are_powers_of_two() {
    assert_eq!(noun_phrase_value(Sign::Positive, 0), int(1));
    assert_eq!(noun_phrase_value(Sign::Positive, 3), int(8));
    assert_eq!(noun_phrase_value(Sign::Negative, 2), int(-4));
    assert_eq!(
        noun_phrase_value(Sign::Positive, 100),
        "1267650600228229401496703205376".parse::<BigInt>().unwrap()
    );
}

#[test]
fn unary_operations() {
    assert_eq!(unary(UnaryOp::Cube, -3).unwrap(), int(-27));
    assert_eq!(unary(UnaryOp::Square, -3).unwrap(), int(9));
    assert_eq!(unary(UnaryOp::Twice, -3).unwrap(), int(-6));
    assert_eq!(unary(UnaryOp::Factorial, 0).unwrap(), int(1));
    assert_eq!(unary(UnaryOp::Factorial, 5).unwrap(), int(120));
    assert_eq!(unary(UnaryOp::SquareRoot, 8).unwrap(), int(2));
    assert_eq!(unary(UnaryOp::SquareRoot, 9).unwrap(), int(3));
    assert_eq!(unary(UnaryOp::SquareRoot, 0).unwrap(), int(0));
}

#[test]
fn factorial_does_not_overflow() {
    let expected: BigInt = "51090942171709440000".parse().unwrap();
    assert_eq!(unary(UnaryOp::Factorial, 21).unwrap(), expected);
}

#[test]
fn negative_operands_fail() {
    assert_eq!(
        unary(UnaryOp::Factorial, -1).unwrap_err().kind,
        EvalErrorKind::NegativeOperand {
            operation: "factorial",
            operand: int(-1)
        }
    );
    assert_eq!(
        unary(UnaryOp::SquareRoot, -1).unwrap_err().kind,
        EvalErrorKind::NegativeOperand {
            operation: "square root",
            operand: int(-1)
        }
    );
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(binary(BinaryOp::Quotient, -7, 2).unwrap(), int(-3));
    assert_eq!(binary(BinaryOp::Quotient, 7, -2).unwrap(), int(-3));
    assert_eq!(binary(BinaryOp::Quotient, -7, -2).unwrap(), int(3));
    assert_eq!(binary(BinaryOp::Remainder, -7, 2).unwrap(), int(-1));
    assert_eq!(binary(BinaryOp::Remainder, 7, -2).unwrap(), int(1));
}

#[test]
fn other_binary_operations() {
    assert_eq!(binary(BinaryOp::Sum, 2, 3).unwrap(), int(5));
    assert_eq!(binary(BinaryOp::Difference, 2, 3).unwrap(), int(-1));
    assert_eq!(binary(BinaryOp::Product, -2, 3).unwrap(), int(-6));
}

proptest! {
    #[test]
    fn zero_divisor_always_fails(a in any::<i64>()) {
        for op in [BinaryOp::Quotient, BinaryOp::Remainder] {
            let err = binary(op, a, 0).unwrap_err();
            prop_assert_eq!(err.kind, EvalErrorKind::DivideByZero);
        }
    }

    #[test]
    fn quotient_and_remainder_recombine(a in any::<i64>(), b in any::<i64>().prop_filter("nonzero", |b| *b != 0)) {
        let q = binary(BinaryOp::Quotient, a, b).unwrap();
        let r = binary(BinaryOp::Remainder, a, b).unwrap();
        prop_assert_eq!(&q * int(b) + &r, int(a));
        // The remainder is smaller than the divisor and shares the dividend's sign.
        prop_assert!(r.magnitude() < int(b).magnitude());
        prop_assert!(r.is_zero() || r.sign() == int(a).sign());
    }

    #[test]
    fn square_root_is_floor(v in 0i64..i64::MAX) {
        let root = unary(UnaryOp::SquareRoot, v).unwrap();
        prop_assert!(&root * &root <= int(v));
        let next = &root + int(1);
        prop_assert!(&next * &next > int(v));
    }
}
