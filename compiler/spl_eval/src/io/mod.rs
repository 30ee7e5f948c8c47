//! Input and output devices.
//!
//! Both sides use enum dispatch over a fixed set of strategies, selected by
//! [`InputStyle`](crate::InputStyle) and [`OutputStyle`](crate::OutputStyle).

mod input;
mod output;

pub use input::{InputManager, InteractiveInput, StreamInput};
pub use output::{OutputManager, OutputSink};
