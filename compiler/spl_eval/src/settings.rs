//! How the interpreter reads input and reports output.

use std::fmt;
use std::str::FromStr;

/// Where input comes from and how it is buffered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputStyle {
    /// Line-buffered standard input; best for piped input.
    #[default]
    Basic,
    /// Prompted standard input, one value per line; nicer for a human.
    Interactive,
    /// Any reader, consumed one character at a time.
    Reader,
}

/// How much the interpreter says while running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputStyle {
    /// Exactly what the play outputs.
    #[default]
    Basic,
    /// Labelled output plus narration of every state change.
    Verbose,
    /// Verbose, plus position, event and state before each step.
    Debug,
}

impl OutputStyle {
    pub fn is_verbose(self) -> bool {
        self >= OutputStyle::Verbose
    }

    pub fn is_debug(self) -> bool {
        self == OutputStyle::Debug
    }
}

/// A style name that is not one of the known lowercase names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} style '{name}'")]
pub struct UnknownStyle {
    pub what: &'static str,
    pub name: String,
}

impl FromStr for InputStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(InputStyle::Basic),
            "interactive" => Ok(InputStyle::Interactive),
            "reader" => Ok(InputStyle::Reader),
            _ => Err(UnknownStyle {
                what: "input",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(OutputStyle::Basic),
            "verbose" => Ok(OutputStyle::Verbose),
            "debug" => Ok(OutputStyle::Debug),
            _ => Err(UnknownStyle {
                what: "output",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputStyle::Basic => "basic",
            InputStyle::Interactive => "interactive",
            InputStyle::Reader => "reader",
        })
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputStyle::Basic => "basic",
            OutputStyle::Verbose => "verbose",
            OutputStyle::Debug => "debug",
        })
    }
}

/// Input and output styles together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub input_style: InputStyle,
    pub output_style: OutputStyle,
}
