//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt;

use spl_ir::{EventKind, Play};

use super::read_file;
use crate::report::render_parse_error;

/// An outline of a parsed play: roster, then acts and scenes with their
/// events.
pub fn describe_play(play: &Play) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_outline(&mut out, play);
    out
}

fn write_outline(out: &mut impl fmt::Write, play: &Play) -> fmt::Result {
    writeln!(out, "Title: {}", play.title)?;
    writeln!(out, "Characters:")?;
    for persona in &play.personae {
        writeln!(out, "  {} ({})", persona.name, persona.description)?;
    }
    for act in &play.acts {
        writeln!(out, "Act {}: {}", act.numeral, act.description)?;
        for scene in &act.scenes {
            writeln!(
                out,
                "  Scene {}: {} ({} events)",
                scene.numeral,
                scene.description,
                scene.events.len()
            )?;
            for event in &scene.events {
                match &event.kind {
                    EventKind::Line(line) => {
                        writeln!(out, "    {}: {} sentences", line.speaker, line.sentences.len())?;
                    }
                    kind => writeln!(out, "    [{}]", kind.label())?,
                }
            }
        }
    }
    Ok(())
}

/// Parse a file and display its outline.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match spl_parse::parse_play(&content) {
        Ok(play) => {
            println!("Parse result for '{path}':");
            print!("{}", describe_play(&play));
        }
        Err(err) => {
            eprint!("{}", render_parse_error(&err, &content));
            std::process::exit(1);
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = spl_lexer::lex(&content);
    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} '{}' @ {}", token.kind, token.text(&content), token.span);
    }
}
