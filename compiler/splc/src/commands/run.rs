//! The `run` command: parse a play and perform it.

use spl_eval::{Interpreter, Settings};

use super::read_file;
use crate::report::{render_error, render_runtime_error};

/// Options accepted by `spl run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    pub settings: Settings,
}

/// Parse the arguments after `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut settings = Settings::default();
    for arg in args {
        if let Some(style) = arg.strip_prefix("--input=") {
            settings.input_style = style.parse().map_err(|e| format!("{e}"))?;
        } else if let Some(style) = arg.strip_prefix("--output=") {
            settings.output_style = style.parse().map_err(|e| format!("{e}"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| String::from("missing file path"))?;
    Ok(RunOptions { path, settings })
}

/// Run a play file to completion, reporting any error on stderr.
pub fn run_file(options: &RunOptions) {
    let source = read_file(&options.path);
    let mut interpreter = match Interpreter::builder()
        .settings(options.settings)
        .build_from_source(&source)
    {
        Ok(interpreter) => interpreter,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            std::process::exit(1);
        }
    };

    let result = interpreter.run(|interpreter| {
        tracing::info!(position = ?interpreter.position(), "breakpoint");
    });
    if let Err(err) = result {
        eprint!("{}", render_runtime_error(&err, &source));
        std::process::exit(1);
    }
}
