//! Constant folding.
//!
//! Run once over a freshly parsed tree. Every subtree whose value cannot
//! depend on runtime state is replaced by [`ExprKind::Constant`], so
//! revisiting it through a scene jump costs nothing. A subtree whose
//! evaluation fails (`the quotient between a cat and nothing`) is left in
//! place so the error is raised, with its span, when it actually executes.
//!
//! Folding is eager, so it covers lines that may never run. Operations whose
//! result would be huge (a factorial of a large operand, repeated cubes) are
//! left for run time rather than computed while the play loads.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use spl_ir::{BinaryOp, Event, EventKind, Expr, ExprKind, Play, Sentence, SentenceKind, UnaryOp};
use spl_stack::ensure_sufficient_stack;

use crate::operators::{evaluate_binary, evaluate_unary, noun_phrase_value};

/// Widest result, in bits, computed at load time.
const MAX_FOLD_BITS: u64 = 4096;

/// Largest operand of `the factorial of` computed at load time.
const MAX_FOLD_FACTORIAL: u32 = 256;

/// Fold every expression in the play.
#[tracing::instrument(level = "debug", skip_all)]
pub fn fold_play(play: &mut Play) {
    let mut folded = 0usize;
    for act in &mut play.acts {
        for scene in &mut act.scenes {
            for event in &mut scene.events {
                folded += fold_event(event);
            }
        }
    }
    tracing::debug!(folded, "constant folding done");
}

/// Fold the sentences of a line; other events hold no expressions.
pub fn fold_event(event: &mut Event) -> usize {
    match &mut event.kind {
        EventKind::Line(line) => line.sentences.iter_mut().map(fold_sentence).sum(),
        EventKind::Entrance(_)
        | EventKind::Exeunt(_)
        | EventKind::Exit(_)
        | EventKind::Breakpoint => 0,
    }
}

/// Fold the expressions of one sentence; returns how many nodes were folded.
pub fn fold_sentence(sentence: &mut Sentence) -> usize {
    match &mut sentence.kind {
        SentenceKind::Assignment(expr) | SentenceKind::Push(expr) => fold_expr(expr),
        SentenceKind::Question(question) => {
            fold_expr(&mut question.first) + fold_expr(&mut question.second)
        }
        SentenceKind::Goto { .. }
        | SentenceKind::Output(_)
        | SentenceKind::Input(_)
        | SentenceKind::Pop => 0,
    }
}

/// Fold `expr` bottom-up; returns how many nodes were folded.
pub fn fold_expr(expr: &mut Expr) -> usize {
    ensure_sufficient_stack(|| {
        let mut folded = match &mut expr.kind {
            ExprKind::Unary { operand, .. } => fold_expr(operand),
            ExprKind::Binary { left, right, .. } => fold_expr(left) + fold_expr(right),
            _ => 0,
        };
        if let Some(value) = constant_value(&expr.kind) {
            expr.kind = ExprKind::Constant(value);
            folded += 1;
        }
        folded
    })
}

/// The value of a node whose operands are already folded, if it is constant
/// and evaluates without error.
fn constant_value(kind: &ExprKind) -> Option<BigInt> {
    match kind {
        ExprKind::NounPhrase { sign, adjectives } => Some(noun_phrase_value(*sign, *adjectives)),
        ExprKind::Nothing => Some(BigInt::default()),
        ExprKind::Unary { op, operand } => match &operand.kind {
            ExprKind::Constant(x) if unary_is_cheap(*op, x) => evaluate_unary(*op, x).ok(),
            _ => None,
        },
        ExprKind::Binary { op, left, right } => match (&left.kind, &right.kind) {
            (ExprKind::Constant(a), ExprKind::Constant(b)) if binary_is_cheap(*op, a, b) => {
                evaluate_binary(*op, a, b).ok()
            }
            _ => None,
        },
        ExprKind::Constant(_)
        | ExprKind::FirstPerson
        | ExprKind::SecondPerson
        | ExprKind::Character(_) => None,
    }
}

fn unary_is_cheap(op: UnaryOp, operand: &BigInt) -> bool {
    let bits = operand.bits();
    match op {
        UnaryOp::Factorial => operand.to_u32().is_some_and(|n| n <= MAX_FOLD_FACTORIAL),
        UnaryOp::Square => bits.saturating_mul(2) <= MAX_FOLD_BITS,
        UnaryOp::Cube => bits.saturating_mul(3) <= MAX_FOLD_BITS,
        UnaryOp::Twice => bits < MAX_FOLD_BITS,
        UnaryOp::SquareRoot => true,
    }
}

fn binary_is_cheap(op: BinaryOp, left: &BigInt, right: &BigInt) -> bool {
    let (left, right) = (left.bits(), right.bits());
    match op {
        BinaryOp::Product => left.saturating_add(right) <= MAX_FOLD_BITS,
        BinaryOp::Sum | BinaryOp::Difference => left.max(right) < MAX_FOLD_BITS,
        BinaryOp::Quotient | BinaryOp::Remainder => true,
    }
}

#[cfg(test)]
mod tests;
