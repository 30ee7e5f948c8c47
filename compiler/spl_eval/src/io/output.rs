//! Output strategies.
//!
//! Uses enum dispatch for the sink, like the input side. The style decides
//! what gets written: plain values, or labelled values plus narration.

use std::io::{self, Write};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::errors::{invalid_character_code, io_error, EvalResult};
use crate::OutputStyle;

/// Where output goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputSink {
    #[default]
    Stdout,
    /// Captured in memory, for tests and embedding.
    Buffer(String),
}

impl OutputSink {
    fn write(&mut self, text: &str) -> EvalResult<()> {
        match self {
            OutputSink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())
                    .and_then(|()| out.flush())
                    .map_err(|e| io_error(&e))
            }
            OutputSink::Buffer(buffer) => {
                buffer.push_str(text);
                Ok(())
            }
        }
    }
}

pub struct OutputManager {
    style: OutputStyle,
    sink: OutputSink,
}

impl OutputManager {
    pub fn new(style: OutputStyle, sink: OutputSink) -> Self {
        OutputManager { style, sink }
    }

    /// Capture everything in memory.
    pub fn buffered(style: OutputStyle) -> Self {
        Self::new(style, OutputSink::Buffer(String::new()))
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    pub fn set_style(&mut self, style: OutputStyle) {
        self.style = style;
    }

    /// Captured output so far; empty for stdout.
    pub fn output(&self) -> &str {
        match &self.sink {
            OutputSink::Stdout => "",
            OutputSink::Buffer(buffer) => buffer,
        }
    }

    /// Take the captured output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        match &mut self.sink {
            OutputSink::Stdout => String::new(),
            OutputSink::Buffer(buffer) => std::mem::take(buffer),
        }
    }

    pub fn output_number(&mut self, number: &BigInt) -> EvalResult<()> {
        if self.style.is_verbose() {
            self.sink.write(&format!("Outputting number: {number}\n"))
        } else {
            self.sink.write(&number.to_string())
        }
    }

    /// Fails with `InvalidCharacterCode` unless `code` is a Unicode scalar
    /// value.
    pub fn output_character(&mut self, code: &BigInt) -> EvalResult<()> {
        let c = code
            .to_u32()
            .and_then(char::from_u32)
            .ok_or_else(|| invalid_character_code(code))?;
        if self.style.is_verbose() {
            self.sink
                .write(&format!("Outputting character: {}\n", quote_char(c)))
        } else {
            let mut utf8 = [0u8; 4];
            self.sink.write(c.encode_utf8(&mut utf8))
        }
    }

    /// Narrate a state change; only verbose styles print anything, so the
    /// message is built lazily.
    pub fn narrate(&mut self, message: impl FnOnce() -> String) -> EvalResult<()> {
        if self.style.is_verbose() {
            let mut line = message();
            line.push('\n');
            self.sink.write(&line)
        } else {
            Ok(())
        }
    }

    /// Like [`narrate`](Self::narrate), for the debug style only.
    pub fn debug(&mut self, message: impl FnOnce() -> String) -> EvalResult<()> {
        if self.style.is_debug() {
            let mut text = message();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            self.sink.write(&text)
        } else {
            Ok(())
        }
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(OutputStyle::Basic, OutputSink::Stdout)
    }
}

/// A character in single quotes with whitespace and quotes made visible:
/// `'a'`, `'\n'`, `"'"`.
fn quote_char(c: char) -> String {
    match c {
        '\'' => String::from("\"'\""),
        '"' => String::from("'\"'"),
        _ => format!("'{}'", c.escape_debug()),
    }
}

#[cfg(test)]
mod tests;
