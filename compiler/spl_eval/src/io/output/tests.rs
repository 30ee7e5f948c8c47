#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn int(v: i64) -> BigInt {
    BigInt::from(v)
}

#[test]
fn basic_output_is_verbatim() {
    let mut out = OutputManager::buffered(OutputStyle::Basic);
    out.output_number(&int(-12)).unwrap();
    out.output_character(&int(72)).unwrap();
    out.output_character(&int(10)).unwrap();
    out.narrate(|| String::from("hidden")).unwrap();
    assert_eq!(out.output(), "-12H\n");
}

#[test]
fn verbose_output_labels_values() {
    let mut out = OutputManager::buffered(OutputStyle::Verbose);
    out.output_number(&int(5)).unwrap();
    out.output_character(&int(64)).unwrap();
    out.output_character(&int(10)).unwrap();
    out.narrate(|| String::from("Romeo set to 5")).unwrap();
    out.debug(|| String::from("hidden")).unwrap();
    assert_eq!(
        out.output(),
        "Outputting number: 5\n\
         Outputting character: '@'\n\
         Outputting character: '\\n'\n\
         Romeo set to 5\n"
    );
}

#[test]
fn debug_output_includes_debug_messages() {
    let mut out = OutputManager::buffered(OutputStyle::Debug);
    out.debug(|| String::from("state\n")).unwrap();
    out.narrate(|| String::from("Exeunt all")).unwrap();
    assert_eq!(out.output(), "state\nExeunt all\n");
}

#[test]
fn invalid_codes_fail() {
    let mut out = OutputManager::buffered(OutputStyle::Basic);
    for code in [int(-1), int(0xD800), int(0x11_0000)] {
        let err = out.output_character(&code).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::InvalidCharacterCode { code });
    }
    assert_eq!(out.output(), "");
}

#[test]
fn take_output_drains() {
    let mut out = OutputManager::buffered(OutputStyle::Basic);
    out.output_number(&int(1)).unwrap();
    assert_eq!(out.take_output(), "1");
    assert_eq!(out.output(), "");
}

#[test]
fn quoting() {
    assert_eq!(quote_char('a'), "'a'");
    assert_eq!(quote_char('\t'), "'\\t'");
    assert_eq!(quote_char('\''), "\"'\"");
    assert_eq!(quote_char('"'), "'\"'");
}
