#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(divide_by_zero().to_string(), "Cannot divide by zero");
    assert_eq!(
        negative_operand("square root", &BigInt::from(-4)).to_string(),
        "Cannot take the square root of a negative number: -4"
    );
    assert_eq!(
        unknown_scene(4, 2).to_string(),
        "Scene IV does not exist in act II"
    );
    assert_eq!(
        duplicate_numeral(1, None).to_string(),
        "Act numeral I is not unique"
    );
    assert_eq!(
        duplicate_numeral(3, Some(1)).to_string(),
        "Scene numeral III is not unique in act I"
    );
    assert_eq!(
        not_on_stage(&CharacterName::new("romeo")).to_string(),
        "Romeo is not on stage"
    );
}

#[test]
fn first_span_wins() {
    let err = divide_by_zero()
        .with_span(Span::new(10, 20))
        .with_span(Span::new(0, 40));
    assert_eq!(err.span, Some(Span::new(10, 20)));
}

#[test]
fn first_snapshot_wins() {
    let mut stage = Stage::new([CharacterName::new("Romeo")]);
    let err = divide_by_zero().with_snapshot(&stage);
    stage.set_global_boolean(true);
    let err = err.with_snapshot(&stage);
    let snapshot = err.snapshot.as_deref().map(Stage::global_boolean);
    assert_eq!(snapshot, Some(false));
}

#[test]
fn unified_error_exposes_span_and_kind() {
    let err = Error::from(divide_by_zero().with_span(Span::new(3, 4)));
    assert_eq!(err.span(), Some(Span::new(3, 4)));
    assert_eq!(err.kind(), Some(&EvalErrorKind::DivideByZero));
}
