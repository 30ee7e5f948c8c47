#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::errors::EvalErrorKind;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn name(raw: &str) -> CharacterName {
    CharacterName::new(raw)
}

fn stage() -> Stage {
    Stage::new([name("Romeo"), name("Juliet"), name("Hamlet")])
}

#[test]
fn roster_duplicates_collapse() {
    let stage = Stage::new([name("Romeo"), name("ROMEO"), name("Juliet")]);
    let names: Vec<&str> = stage.characters().map(|c| c.name().as_str()).collect();
    assert_eq!(names, ["Romeo", "Juliet"]);
}

#[test]
fn enter_is_all_or_nothing() {
    let mut stage = stage();
    stage.enter(&[name("Romeo")]).unwrap();
    let err = stage.enter(&[name("Juliet"), name("Romeo")]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::AlreadyOnStage { name: name("Romeo") });
    assert_eq!(stage.on_stage(), [name("Romeo")]);
}

#[test]
fn enter_rejects_unknown_and_repeated_names() {
    let mut stage = stage();
    let err = stage.enter(&[name("Puck")]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UnknownCharacter { name: name("Puck") });
    let err = stage.enter(&[name("Romeo"), name("Romeo")]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::AlreadyOnStage { name: name("Romeo") });
    assert!(stage.on_stage().is_empty());
}

#[test]
fn exeunt_named_requires_presence() {
    let mut stage = stage();
    stage.enter(&[name("Romeo"), name("Juliet")]).unwrap();
    let err = stage
        .exeunt(Some([name("Juliet"), name("Hamlet")].as_slice()))
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::NotOnStage { name: name("Hamlet") });
    assert_eq!(stage.on_stage().len(), 2);

    stage.exeunt(Some([name("Juliet")].as_slice())).unwrap();
    assert_eq!(stage.on_stage(), [name("Romeo")]);
}

#[test]
fn exeunt_all_always_succeeds() {
    let mut stage = stage();
    stage.exeunt(None).unwrap();
    stage.enter(&[name("Hamlet"), name("Romeo")]).unwrap();
    stage.exeunt(None).unwrap();
    assert!(stage.on_stage().is_empty());
}

#[test]
fn exit_one() {
    let mut stage = stage();
    assert!(stage.exit(&name("Romeo")).is_err());
    stage.enter(&[name("Romeo"), name("Juliet")]).unwrap();
    stage.exit(&name("Romeo")).unwrap();
    assert!(!stage.is_on_stage(&name("Romeo")));
    assert!(stage.is_on_stage(&name("Juliet")));
}

#[test]
fn opposite_needs_exactly_one_other() {
    let mut stage = stage();
    assert_eq!(
        stage.opposite(&name("Romeo")).unwrap_err().kind,
        EvalErrorKind::NotOnStage { name: name("Romeo") }
    );

    stage.enter(&[name("Romeo")]).unwrap();
    assert_eq!(
        stage.opposite(&name("Romeo")).unwrap_err().kind,
        EvalErrorKind::AmbiguousTarget {
            speaker: name("Romeo"),
            others: 0
        }
    );

    stage.enter(&[name("Juliet")]).unwrap();
    assert_eq!(stage.opposite(&name("Romeo")).unwrap(), &name("Juliet"));
    assert_eq!(stage.opposite(&name("Juliet")).unwrap(), &name("Romeo"));

    stage.enter(&[name("Hamlet")]).unwrap();
    assert_eq!(
        stage.opposite(&name("Romeo")).unwrap_err().kind,
        EvalErrorKind::AmbiguousTarget {
            speaker: name("Romeo"),
            others: 2
        }
    );
}

#[test]
fn display_groups_by_presence() {
    let mut stage = stage();
    stage.enter(&[name("Juliet"), name("Romeo")]).unwrap();
    stage.character_mut(&name("Hamlet")).unwrap().push(BigInt::from(1));
    stage.character_mut(&name("Hamlet")).unwrap().set_value(BigInt::from(3));
    stage.set_global_boolean(true);
    assert_eq!(
        stage.to_string(),
        "global boolean = True\n\
         on stage:\n  Juliet = 0 ()\n  Romeo = 0 ()\n\
         off stage:\n  Hamlet = 3 (1)\n"
    );
}
