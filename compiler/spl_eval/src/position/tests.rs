#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use spl_ir::Span;

/// `acts[i]` lists `(scene numeral, event count)` for act `i + 1`.
fn outline(acts: &[&[(u32, usize)]]) -> Outline {
    Outline {
        acts: acts
            .iter()
            .zip(1..)
            .map(|(scenes, numeral)| ActOutline {
                numeral,
                scenes: scenes
                    .iter()
                    .map(|&(numeral, events)| SceneOutline { numeral, events })
                    .collect(),
            })
            .collect(),
    }
}

fn pos(act: usize, scene: usize, event: usize) -> Position {
    Position { act, scene, event }
}

fn scene(value: u32) -> Numeral {
    Numeral::new(value, Span::new(0, 1))
}

#[test]
fn starts_past_empty_scenes() {
    let tracker = PositionTracker::new(outline(&[&[(1, 0), (2, 0), (3, 2)]]));
    assert_eq!(tracker.position(), pos(0, 2, 0));
    assert!(!tracker.play_over());
}

#[test]
fn advance_walks_events_scenes_and_acts() {
    let mut tracker = PositionTracker::new(outline(&[&[(1, 2), (2, 0)], &[], &[(1, 1)]]));
    let mut seen = vec![tracker.position()];
    while !tracker.play_over() {
        tracker.advance();
        seen.push(tracker.position());
    }
    assert_eq!(
        seen,
        [pos(0, 0, 0), pos(0, 0, 1), pos(2, 0, 0), pos(3, 0, 0)]
    );
    tracker.advance();
    assert_eq!(tracker.position(), pos(3, 0, 0));
}

#[test]
fn empty_play_is_over_immediately() {
    assert!(PositionTracker::new(Outline::default()).play_over());
    assert!(PositionTracker::new(outline(&[&[(1, 0)], &[]])).play_over());
}

#[test]
fn jump_resets_to_first_event() {
    let mut tracker = PositionTracker::new(outline(&[&[(1, 3), (2, 2)]]));
    tracker.advance();
    tracker.advance();
    tracker.advance();
    assert_eq!(tracker.position(), pos(0, 1, 0));
    tracker.jump(&scene(1)).unwrap();
    assert_eq!(tracker.position(), pos(0, 0, 0));
}

#[test]
fn jump_only_searches_current_act() {
    let mut tracker = PositionTracker::new(outline(&[&[(1, 1)], &[(1, 1), (2, 1)]]));
    let err = tracker.jump(&scene(2)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UnknownScene { scene: 2, act: 1 });
    assert_eq!(err.span, Some(Span::new(0, 1)));
    assert_eq!(tracker.position(), pos(0, 0, 0));
}

#[test]
fn jump_into_empty_scene_normalizes_forward() {
    let mut tracker = PositionTracker::new(outline(&[&[(1, 1), (2, 0), (3, 1)]]));
    tracker.jump(&scene(2)).unwrap();
    assert_eq!(tracker.position(), pos(0, 2, 0));
}

#[test]
fn display_names_the_scene() {
    let mut tracker = PositionTracker::new(outline(&[&[(4, 2)]]));
    tracker.advance();
    assert_eq!(tracker.to_string(), "Act I, Scene IV, event 2");
    tracker.advance();
    assert_eq!(tracker.to_string(), "play over");
}

#[test]
fn outline_rejects_duplicate_numerals() {
    let play = spl_parse::parse_play(
        "T. Romeo, x. Act I: a. Scene I: b. Scene II: c. Act I: d. Scene I: e.",
    )
    .unwrap();
    let err = Outline::of(&play).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::DuplicateNumeral {
            numeral: 1,
            act: None
        }
    );
    assert_eq!(err.span, Some(play.acts[1].numeral.span));

    let play = spl_parse::parse_play("T. Romeo, x. Act I: a. Scene II: b. Scene II: c.").unwrap();
    let err = Outline::of(&play).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::DuplicateNumeral {
            numeral: 2,
            act: Some(1)
        }
    );
}

#[test]
fn same_scene_numeral_in_two_acts_is_fine() {
    let play = spl_parse::parse_play("T. Romeo, x. Act I: a. Scene I: b. Act II: c. Scene I: d.")
        .unwrap();
    assert!(Outline::of(&play).is_ok());
}
