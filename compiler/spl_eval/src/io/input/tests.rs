#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn int(v: i64) -> BigInt {
    BigInt::from(v)
}

fn reader(text: &str) -> StreamInput {
    StreamInput::chars(Cursor::new(text.to_string()))
}

fn lines(text: &str) -> StreamInput {
    StreamInput::lines(Cursor::new(text.to_string()))
}

mod reader_input {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_leave_the_newline() {
        let mut input = reader("123\n-2aaa");
        assert_eq!(input.consume_numeric_input().unwrap(), int(123));
        assert_eq!(input.consume_character_input().unwrap(), int(10));
        assert_eq!(input.consume_numeric_input().unwrap(), int(-2));
        assert_eq!(input.consume_numeric_input().unwrap(), int(0));
        assert_eq!(input.take_remaining().unwrap(), "aaa");
    }

    #[test]
    fn characters_then_end_of_input() {
        let mut input = reader("Test");
        let codes: Vec<BigInt> = (0..5)
            .map(|_| input.consume_character_input().unwrap())
            .collect();
        assert_eq!(codes, [int(84), int(101), int(115), int(116), int(-1)]);
    }

    #[test]
    fn lone_sign_is_pushed_back() {
        let mut input = reader("-x");
        assert_eq!(input.consume_numeric_input().unwrap(), int(0));
        assert_eq!(input.consume_character_input().unwrap(), int(i64::from(b'-')));
    }

    #[test]
    fn multibyte_characters() {
        let mut input = reader("é!");
        assert_eq!(input.consume_character_input().unwrap(), int(0xE9));
        assert_eq!(input.take_remaining().unwrap(), "!");
    }

    #[test]
    fn numbers_are_unbounded() {
        let mut input = reader("+123456789012345678901234567890");
        let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(input.consume_numeric_input().unwrap(), expected);
    }
}

mod line_input {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_swallow_one_newline() {
        let mut input = lines("12\nA\n");
        assert_eq!(input.consume_numeric_input().unwrap(), int(12));
        assert_eq!(input.consume_character_input().unwrap(), int(i64::from(b'A')));
        assert_eq!(input.consume_character_input().unwrap(), int(10));
        assert_eq!(input.consume_character_input().unwrap(), int(-1));
    }

    #[test]
    fn end_of_input_defaults() {
        let mut input = lines("");
        assert_eq!(input.consume_numeric_input().unwrap(), int(0));
        assert_eq!(input.consume_character_input().unwrap(), int(-1));
    }

    #[test]
    fn digits_do_not_span_lines() {
        let mut input = lines("-\n5\n");
        assert_eq!(input.consume_numeric_input().unwrap(), int(0));
        assert_eq!(input.consume_character_input().unwrap(), int(i64::from(b'-')));
        assert_eq!(input.consume_character_input().unwrap(), int(10));
        assert_eq!(input.consume_numeric_input().unwrap(), int(5));
    }
}

mod interactive_input {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interactive(text: &str) -> InteractiveInput {
        InteractiveInput::new(Cursor::new(text.to_string()), io::sink())
    }

    #[test]
    fn numbers_one_per_line() {
        let mut input = interactive("42\n -7 \n");
        assert_eq!(input.consume_numeric_input().unwrap(), int(42));
        assert_eq!(input.consume_numeric_input().unwrap(), int(-7));
    }

    #[test]
    fn non_numbers_are_rejected() {
        let mut input = interactive("forty-two\n");
        let err = input.consume_numeric_input().unwrap_err();
        assert_eq!(
            err.kind,
            crate::errors::EvalErrorKind::InvalidInput {
                text: "forty-two".to_string()
            }
        );
    }

    #[test]
    fn character_answers() {
        let mut input = interactive("xyz\n\nEOF\n");
        assert_eq!(input.consume_character_input().unwrap(), int(i64::from(b'x')));
        assert_eq!(input.consume_character_input().unwrap(), int(10));
        assert_eq!(input.consume_character_input().unwrap(), int(-1));
        assert_eq!(input.consume_character_input().unwrap(), int(-1));
    }
}

#[test]
fn manager_reports_its_style() {
    let manager = InputManager::reader(Cursor::new(Vec::new()));
    assert_eq!(manager.style(), InputStyle::Reader);
    let mut manager = InputManager::Interactive(InteractiveInput::new(Cursor::new(""), io::sink()));
    assert!(manager.take_remaining().is_none());
}
