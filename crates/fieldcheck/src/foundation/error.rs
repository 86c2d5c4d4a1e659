//! Error types
//!
//! Validation failures themselves are data (see [`FieldErrors`]). The types
//! here cover the two places where a Rust caller wants a real `Error`:
//! building typed format parameters, and bailing out of a handler with `?`
//! once a log has collected failures.

use crate::log::FieldErrors;

// ============================================================================
// FORMAT ERROR
// ============================================================================

/// Returned when numeric format parameters are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Integer base is neither 0 nor within `2..=36`.
    #[error("invalid integer base {0}: expected 0 or 2..=36")]
    InvalidBase(u32),

    /// Integer bit width is above 64.
    #[error("invalid integer bit size {0}: expected 0..=64")]
    InvalidBitSize(u32),

    /// Float bit width is neither 32 nor 64.
    #[error("invalid float bit size {0}: expected 32 or 64")]
    InvalidFloatBitSize(u32),
}

// ============================================================================
// VALIDATION FAILED
// ============================================================================

/// A finished validation session that recorded at least one failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {errors}")]
pub struct ValidationFailed {
    /// Every recorded failure, grouped by field.
    pub errors: FieldErrors,
}

impl ValidationFailed {
    /// Returns the messages recorded for `field`.
    #[must_use]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field)
    }
}
