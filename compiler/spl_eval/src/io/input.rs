//! Input strategies.
//!
//! Numeric input is an optional sign followed by digits. When no digits are
//! available the read yields 0 and leaves the input where it was (a lone
//! sign is pushed back). Character input yields the next character's code,
//! or -1 at end of input.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Read, Write};

use num_bigint::BigInt;

use crate::errors::{invalid_input, io_error, EvalResult};
use crate::InputStyle;

/// How a [`StreamInput`] refills its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Refill {
    /// A whole line at a time; numbers swallow the newline after them.
    Line,
    /// One character at a time, only when needed.
    Char,
}

/// Buffered input over any reader.
pub struct StreamInput {
    source: Box<dyn BufRead>,
    pending: VecDeque<char>,
    refill: Refill,
}

impl StreamInput {
    /// Line-buffered standard input.
    pub fn stdin() -> Self {
        Self::lines(BufReader::new(io::stdin()))
    }

    /// Line-buffered input from `source`. Standard output is flushed before
    /// every blocking read so prompts written by the play appear first.
    pub fn lines(source: impl BufRead + 'static) -> Self {
        StreamInput {
            source: Box::new(source),
            pending: VecDeque::new(),
            refill: Refill::Line,
        }
    }

    /// Lazy, character-at-a-time input from `source`.
    pub fn chars(source: impl BufRead + 'static) -> Self {
        StreamInput {
            source: Box::new(source),
            pending: VecDeque::new(),
            refill: Refill::Char,
        }
    }

    /// Everything not yet consumed, including buffered lookahead. Drains the
    /// underlying reader.
    pub fn take_remaining(&mut self) -> EvalResult<String> {
        let mut rest: String = self.pending.drain(..).collect();
        self.source
            .read_to_string(&mut rest)
            .map_err(|e| io_error(&e))?;
        Ok(rest)
    }

    pub fn consume_numeric_input(&mut self) -> EvalResult<BigInt> {
        if self.refill == Refill::Line && !self.fill_line()? {
            return Ok(BigInt::default());
        }

        let sign = match self.peek()? {
            Some(c @ ('+' | '-')) => {
                self.pending.pop_front();
                Some(c)
            }
            _ => None,
        };

        let mut digits = String::new();
        while let Some(c) = self.peek()?.filter(char::is_ascii_digit) {
            digits.push(c);
            self.pending.pop_front();
        }

        if digits.is_empty() {
            if let Some(sign) = sign {
                self.pending.push_front(sign);
            }
            return Ok(BigInt::default());
        }

        if self.refill == Refill::Line && self.pending.front() == Some(&'\n') {
            self.pending.pop_front();
        }

        let magnitude: BigInt = digits.parse().map_err(|_| invalid_input(&digits))?;
        Ok(if sign == Some('-') { -magnitude } else { magnitude })
    }

    pub fn consume_character_input(&mut self) -> EvalResult<BigInt> {
        if self.refill == Refill::Line {
            self.fill_line()?;
        }
        let Some(c) = self.peek()? else {
            return Ok(BigInt::from(-1));
        };
        self.pending.pop_front();
        Ok(BigInt::from(u32::from(c)))
    }

    /// The next character without consuming it. Only character-mode input
    /// reads from the source here; line mode looks at the current line only.
    fn peek(&mut self) -> EvalResult<Option<char>> {
        if self.pending.is_empty() && self.refill == Refill::Char {
            if let Some(c) = read_char(&mut *self.source).map_err(|e| io_error(&e))? {
                self.pending.push_back(c);
            }
        }
        Ok(self.pending.front().copied())
    }

    /// Read a line if the buffer is empty. Returns whether anything is
    /// buffered afterwards.
    fn fill_line(&mut self) -> EvalResult<bool> {
        if self.pending.is_empty() {
            io::stdout().flush().map_err(|e| io_error(&e))?;
            let mut line = String::new();
            self.source
                .read_line(&mut line)
                .map_err(|e| io_error(&e))?;
            self.pending.extend(line.chars());
        }
        Ok(!self.pending.is_empty())
    }
}

/// Decode one UTF-8 character; invalid sequences become U+FFFD.
fn read_char(source: &mut dyn BufRead) -> io::Result<Option<char>> {
    let first = match source.fill_buf()? {
        [] => return Ok(None),
        [first, ..] => *first,
    };
    let width = match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    let mut bytes = [0u8; 4];
    let mut filled = 0;
    while filled < width {
        let n = source.read(&mut bytes[filled..width])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    let c = std::str::from_utf8(&bytes[..filled])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(Some(c))
}

/// Prompted input: one answer per line.
pub struct InteractiveInput {
    source: Box<dyn BufRead>,
    prompt: Box<dyn Write>,
}

impl InteractiveInput {
    /// Prompt on standard output and read standard input.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    pub fn new(source: impl BufRead + 'static, prompt: impl Write + 'static) -> Self {
        InteractiveInput {
            source: Box::new(source),
            prompt: Box::new(prompt),
        }
    }

    /// Ask for a line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> EvalResult<Option<String>> {
        write!(self.prompt, "{prompt}").map_err(|e| io_error(&e))?;
        self.prompt.flush().map_err(|e| io_error(&e))?;
        let mut line = String::new();
        let read = self
            .source
            .read_line(&mut line)
            .map_err(|e| io_error(&e))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    pub fn consume_numeric_input(&mut self) -> EvalResult<BigInt> {
        let answer = self.ask("Taking input number: ")?.unwrap_or_default();
        answer
            .trim()
            .parse::<BigInt>()
            .map_err(|_| invalid_input(&answer))
    }

    /// `EOF` (or end of input) is -1 and an empty answer is a newline.
    pub fn consume_character_input(&mut self) -> EvalResult<BigInt> {
        let code = match self.ask("Taking input character: ")? {
            None => -1,
            Some(answer) if answer == "EOF" => -1,
            Some(answer) => answer.chars().next().map_or(10, |c| i64::from(u32::from(c))),
        };
        Ok(BigInt::from(code))
    }
}

/// The active input strategy.
pub enum InputManager {
    Basic(StreamInput),
    Reader(StreamInput),
    Interactive(InteractiveInput),
}

impl InputManager {
    /// The default device for `style`, reading standard input.
    pub fn from_style(style: InputStyle) -> Self {
        match style {
            InputStyle::Basic => InputManager::Basic(StreamInput::stdin()),
            InputStyle::Reader => InputManager::Reader(StreamInput::chars(BufReader::new(io::stdin()))),
            InputStyle::Interactive => InputManager::Interactive(InteractiveInput::stdio()),
        }
    }

    /// Character-at-a-time input from any reader.
    pub fn reader(source: impl Read + 'static) -> Self {
        InputManager::Reader(StreamInput::chars(BufReader::new(source)))
    }

    pub fn style(&self) -> InputStyle {
        match self {
            InputManager::Basic(_) => InputStyle::Basic,
            InputManager::Reader(_) => InputStyle::Reader,
            InputManager::Interactive(_) => InputStyle::Interactive,
        }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn consume_numeric_input(&mut self) -> EvalResult<BigInt> {
        match self {
            InputManager::Basic(input) | InputManager::Reader(input) => {
                input.consume_numeric_input()
            }
            InputManager::Interactive(input) => input.consume_numeric_input(),
        }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    pub fn consume_character_input(&mut self) -> EvalResult<BigInt> {
        match self {
            InputManager::Basic(input) | InputManager::Reader(input) => {
                input.consume_character_input()
            }
            InputManager::Interactive(input) => input.consume_character_input(),
        }
    }

    /// Unconsumed input of a stream device, draining its reader. `None` for
    /// interactive input.
    pub fn take_remaining(&mut self) -> Option<EvalResult<String>> {
        match self {
            InputManager::Basic(input) | InputManager::Reader(input) => {
                Some(input.take_remaining())
            }
            InputManager::Interactive(_) => None,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager::from_style(InputStyle::Basic)
    }
}

#[cfg(test)]
mod tests;
