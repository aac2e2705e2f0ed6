//! Stack safety for deep recursion.
//!
//! Recursion depth equals source nesting depth, and the input is whatever
//! file the checker is pointed at. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing on pathologically nested input.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
