//! Evaluation and dispatch.
//!
//! [`ExecContext`] borrows the mutable runtime pieces of an interpreter
//! (stage, input, output) so events can execute while the play tree that
//! holds them stays borrowed immutably.

mod event;
mod expr;
mod sentence;

use spl_ir::Numeral;

use crate::io::{InputManager, OutputManager};
use crate::Stage;

/// What the caller should do after an event or sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Proceed to the next event.
    Continue,
    /// A goto fired: continue at this scene of the current act.
    Jump(Numeral),
    /// A breakpoint: hand control to the driver, then proceed.
    Pause,
}

pub(crate) struct ExecContext<'a> {
    pub(crate) stage: &'a mut Stage,
    pub(crate) input: &'a mut InputManager,
    pub(crate) output: &'a mut OutputManager,
}

impl<'a> ExecContext<'a> {
    pub(crate) fn new(
        stage: &'a mut Stage,
        input: &'a mut InputManager,
        output: &'a mut OutputManager,
    ) -> Self {
        ExecContext {
            stage,
            input,
            output,
        }
    }
}

pub(crate) use expr::{evaluate, evaluate_question};
