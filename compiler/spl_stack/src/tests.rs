use super::*;

/// Mirrors the shape of nested unary operators: each level doubles.
fn nested_twice(depth: u32) -> u64 {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            1
        } else {
            nested_twice(depth - 1).wrapping_mul(2)
        }
    })
}

/// Counts levels without doing arithmetic, to reach large depths.
fn nested_depth(depth: u64) -> u64 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nested_depth(depth - 1) + 1 })
}

#[test]
fn shallow_nesting_evaluates() {
    assert_eq!(nested_twice(10), 1024);
}

#[test]
fn deep_nesting_does_not_overflow() {
    assert_eq!(nested_depth(200_000), 200_000);
}

#[test]
fn passes_results_through() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("empty stack".to_string()));
    assert_eq!(result, Err("empty stack".to_string()));
}
