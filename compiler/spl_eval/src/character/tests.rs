#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn romeo() -> Character {
    Character::new(CharacterName::new("Romeo"))
}

#[test]
fn starts_at_zero_with_empty_stack() {
    let c = romeo();
    assert_eq!(c.value(), &BigInt::from(0));
    assert!(c.stack().is_empty());
    assert_eq!(c.to_string(), "0 ()");
}

#[test]
fn push_then_pop_restores_value() {
    let mut c = romeo();
    c.push(BigInt::from(7));
    c.push(BigInt::from(-3));
    c.pop().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(c.value(), &BigInt::from(-3));
    assert_eq!(c.stack(), [BigInt::from(7)]);
}

#[test]
fn pop_on_empty_stack_fails() {
    let mut c = romeo();
    c.set_value(BigInt::from(5));
    let err = c.pop().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::EmptyStack {
            name: CharacterName::new("Romeo")
        }
    );
    assert_eq!(c.value(), &BigInt::from(5));
}

#[test]
fn display_lists_stack_top_first() {
    let mut c = romeo();
    c.push(BigInt::from(0));
    c.set_value(BigInt::from(-1));
    c.push(BigInt::from(-2));
    c.push(BigInt::from(2));
    assert_eq!(c.to_string(), "-1 (2 -2 0)");
}
