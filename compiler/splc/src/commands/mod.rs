//! Command handlers for the `spl` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] live here in the module root.

mod debug;
mod run;

pub use debug::{describe_play, lex_file, parse_file};
pub use run::{parse_run_options, run_file, RunOptions};

/// Read a play file, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
