//! Crate-wide input validation error.
//!
//! Every exercise rejects malformed input with the same failure type;
//! there are no other failure modes and no recovery semantics.

use thiserror::Error;

/// Invalid-argument failure shared by all algorithm entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input slice was empty.
    #[error("input must not be empty")]
    Empty,

    /// An element was not a decimal digit.
    #[error("expected a digit in 0..=9, got {0}")]
    NotADigit(u8),

    /// An element was not one of the three flag colors.
    #[error("expected a value in 0..=2, got {0}")]
    NotAFlagColor(u8),

    /// A route path contained no non-slash characters.
    #[error("path has no non-slash characters")]
    EmptyPath,
}
