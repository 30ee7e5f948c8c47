#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use spl_eval::Interpreter;

#[test]
fn line_lookup() {
    let source = "one\ntwo\nthree";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_of(0), 1);
    assert_eq!(index.line_of(2), 1);
    assert_eq!(index.line_of(3), 1);
    assert_eq!(index.line_of(4), 2);
    assert_eq!(index.line_of(13), 3);
}

#[test]
fn excerpt_brackets_the_span() {
    let source = "Romeo:\n You are a pig.\nJuliet: Hi.";
    let start = source.find("a pig").unwrap();
    let span = Span::try_from_range(start..start + 5).unwrap();
    assert_eq!(excerpt(source, span), " You are >>a pig<<.");
}

#[test]
fn excerpt_spans_several_lines() {
    let source = "a\nbc\nde\nf";
    let span = Span::new(3, 6);
    assert_eq!(excerpt(source, span), "b>>c\nd<<e");
}

#[test]
fn parse_errors_show_where_they_stopped() {
    let source = "Title.\nRomeo, a man.\nAct I: Start.\nScene I: Here.\nRomeo: Sing!";
    let err = Interpreter::from_source(source).err().unwrap();
    let report = render_error(&err, source);
    assert!(report.starts_with("SPL parse error: failed to parse "), "{report}");
    assert!(report.contains("  at line 5\n"), "{report}");
    assert!(report.contains("Romeo: >>Sing<<!"), "{report}");
}

#[test]
fn runtime_errors_show_the_stage() {
    let source = "\
Title.
Romeo, a man.
Juliet, a woman.
Act I: Start.
Scene I: Here.
[Enter Romeo and Juliet]
Juliet: You are the quotient between a cat and nothing.
";
    let mut interpreter = Interpreter::builder()
        .capture_output()
        .build_from_source(source)
        .unwrap();
    let err = interpreter.run(|_| {}).unwrap_err();
    assert_eq!(
        render_runtime_error(&err, source),
        "SPL runtime error: Cannot divide by zero\n  \
         at line 7\n\
         ----- context -----\n\
         Juliet: You are >>the quotient between a cat and nothing<<.\n\
         \n\
         ----- state -----\n\
         global boolean = False\n\
         on stage:\n  \
         Romeo = 0 ()\n  \
         Juliet = 0 ()\n\
         off stage:\n"
    );
}
