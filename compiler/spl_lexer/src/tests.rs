use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn words(source: &str) -> Vec<&str> {
    lex(source)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| t.text(source))
        .collect()
}

#[test]
fn lexes_a_line() {
    assert_eq!(
        kinds("Juliet: You are nothing!"),
        vec![
            TokenKind::Word,
            TokenKind::Colon,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Exclamation,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_stage_directions() {
    assert_eq!(
        kinds("[Enter Romeo, Juliet]"),
        vec![
            TokenKind::LBracket,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Comma,
            TokenKind::Word,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn hyphens_and_apostrophes_stay_inside_words() {
    assert_eq!(
        words("a half-witted flirt-gill on a summer's day"),
        vec!["a", "half-witted", "flirt-gill", "on", "a", "summer's", "day"]
    );
}

#[test]
fn digits_and_dashes_are_symbols() {
    assert_eq!(
        kinds("A REPL-tastic Adventure 2 - ok."),
        vec![
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Symbol,
            TokenKind::Symbol,
            TokenKind::Word,
            TokenKind::Period,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_point_into_source() {
    let source = "Act II:\n  Scene";
    let tokens = lex(source);
    assert_eq!(tokens[1].text(source), "II");
    assert_eq!(tokens[3].text(source), "Scene");
    assert_eq!(tokens[4].span, Span::point(15));
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds("   \n"), vec![TokenKind::Eof]);
}
