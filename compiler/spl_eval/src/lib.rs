//! SPL Eval - the execution engine for Shakespeare Programming Language plays.
//!
//! # Architecture
//!
//! - [`Stage`] and [`Character`]: who is on stage, every register and stack,
//!   and the global boolean
//! - `exec`: the expression evaluator plus sentence and event dispatch
//! - [`fold`]: constant folding, run once when a play is loaded
//! - [`PositionTracker`]: the normalized act/scene/event cursor and scene
//!   jumps within the current act
//! - [`Interpreter`]: composes the above into a steppable session and
//!   enriches errors with location and a state snapshot
//! - [`InputManager`] / [`OutputManager`]: pluggable I/O devices
//!
//! # Example
//!
//! ```no_run
//! use spl_eval::{Interpreter, OutputStyle};
//!
//! let source = std::fs::read_to_string("hello.spl")?;
//! let mut interpreter = Interpreter::builder()
//!     .output_style(OutputStyle::Verbose)
//!     .build_from_source(&source)?;
//! interpreter.run(|_| {})?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod character;
pub mod errors;
mod exec;
pub mod fold;
mod interpreter;
mod io;
mod operators;
mod position;
mod settings;
mod stage;

pub use character::Character;
pub use errors::{Error, EvalError, EvalErrorKind, EvalResult};
pub use exec::Flow;
pub use interpreter::{Fragment, Interpreter, InterpreterBuilder, Node, Step};
pub use io::{InputManager, InteractiveInput, OutputManager, OutputSink, StreamInput};
pub use operators::{evaluate_binary, evaluate_unary, noun_phrase_value};
pub use position::{Outline, Position, PositionTracker};
pub use settings::{InputStyle, OutputStyle, Settings, UnknownStyle};
pub use stage::Stage;
