//! Stack growth for deeply nested plays.
//!
//! SPL expressions nest through operators ("the sum of the square of the
//! difference between ..."), and both the parser and the evaluator walk
//! them recursively. A generated play can nest thousands of levels deep, so
//! every recursive entry point runs through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below the red zone. On WASM the closure is called
//! directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
