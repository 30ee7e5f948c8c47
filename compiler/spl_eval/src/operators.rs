//! Arithmetic for unary and binary operations.
//!
//! All values are unbounded, so the only failures are domain errors:
//! division by zero and negative operands to factorial and square root.
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend, so `quotient(-7, 2) == -3` and `remainder(-7, 2) == -1`.

use num_bigint::{BigInt, Sign as BigSign};
use num_traits::{One, Zero};
use spl_ir::{BinaryOp, Sign, UnaryOp};

use crate::errors::{divide_by_zero, negative_operand, EvalResult};

/// `±2^adjectives`
pub fn noun_phrase_value(sign: Sign, adjectives: u32) -> BigInt {
    let magnitude = BigInt::one() << adjectives;
    match sign {
        Sign::Positive => magnitude,
        Sign::Negative => -magnitude,
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: &BigInt) -> EvalResult<BigInt> {
    match op {
        UnaryOp::Cube => Ok(operand * operand * operand),
        UnaryOp::Square => Ok(operand * operand),
        UnaryOp::Twice => Ok(operand * BigInt::from(2)),
        UnaryOp::Factorial => factorial(operand),
        UnaryOp::SquareRoot => {
            if operand.sign() == BigSign::Minus {
                return Err(negative_operand("square root", operand));
            }
            Ok(operand.sqrt())
        }
    }
}

fn factorial(operand: &BigInt) -> EvalResult<BigInt> {
    if operand.sign() == BigSign::Minus {
        return Err(negative_operand("factorial", operand));
    }
    let mut result = BigInt::one();
    let mut factor = BigInt::from(2);
    while &factor <= operand {
        result *= &factor;
        factor += BigInt::one();
    }
    Ok(result)
}

pub fn evaluate_binary(op: BinaryOp, left: &BigInt, right: &BigInt) -> EvalResult<BigInt> {
    match op {
        BinaryOp::Sum => Ok(left + right),
        BinaryOp::Difference => Ok(left - right),
        BinaryOp::Product => Ok(left * right),
        // BigInt division and remainder already truncate toward zero.
        BinaryOp::Quotient => {
            if right.is_zero() {
                return Err(divide_by_zero());
            }
            Ok(left / right)
        }
        BinaryOp::Remainder => {
            if right.is_zero() {
                return Err(divide_by_zero());
            }
            Ok(left % right)
        }
    }
}

#[cfg(test)]
mod tests;
