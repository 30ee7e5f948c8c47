//! The expression evaluator.
//!
//! Expressions never mutate state. The speaker is checked once, at the root;
//! sub-expressions only check what they themselves need (the opposite
//! character for second-person values). Errors carry the span of the
//! innermost node that failed.

use num_bigint::BigInt;
use spl_ir::{CharacterName, Expr, ExprKind, Question};
use spl_stack::ensure_sufficient_stack;

use crate::errors::EvalResult;
use crate::operators::{evaluate_binary, evaluate_unary, noun_phrase_value};
use crate::Stage;

/// Evaluate `expr` as spoken by `speaker`, who must be on stage.
pub(crate) fn evaluate(stage: &Stage, expr: &Expr, speaker: &CharacterName) -> EvalResult<BigInt> {
    stage
        .assert_on_stage(speaker)
        .map_err(|e| e.with_span(expr.span))?;
    eval(stage, expr, speaker)
}

/// Compare both sides of `question` as asked by `speaker`.
pub(crate) fn evaluate_question(
    stage: &Stage,
    question: &Question,
    speaker: &CharacterName,
) -> EvalResult<bool> {
    stage
        .assert_on_stage(speaker)
        .map_err(|e| e.with_span(question.span))?;
    let first = eval(stage, &question.first, speaker)?;
    let second = eval(stage, &question.second, speaker)?;
    Ok(question.comparative.holds(&first, &second))
}

fn eval(stage: &Stage, expr: &Expr, speaker: &CharacterName) -> EvalResult<BigInt> {
    ensure_sufficient_stack(|| eval_kind(stage, &expr.kind, speaker))
        .map_err(|e| e.with_span(expr.span))
}

fn eval_kind(stage: &Stage, kind: &ExprKind, speaker: &CharacterName) -> EvalResult<BigInt> {
    match kind {
        ExprKind::Constant(value) => Ok(value.clone()),
        ExprKind::Nothing => Ok(BigInt::default()),
        ExprKind::NounPhrase { sign, adjectives } => Ok(noun_phrase_value(*sign, *adjectives)),
        ExprKind::FirstPerson => Ok(stage.character(speaker)?.value().clone()),
        ExprKind::SecondPerson => {
            let other = stage.opposite(speaker)?;
            Ok(stage.character(other)?.value().clone())
        }
        ExprKind::Character(name) => Ok(stage.character(name)?.value().clone()),
        ExprKind::Unary { op, operand } => {
            let value = eval(stage, operand, speaker)?;
            evaluate_unary(*op, &value)
        }
        ExprKind::Binary { op, left, right } => {
            let left = eval(stage, left, speaker)?;
            let right = eval(stage, right, speaker)?;
            evaluate_binary(*op, &left, &right)
        }
    }
}
