//! Error taxonomy for the layout engines.
//!
//! Invalid arguments are the only failure path. Every other edge case is a
//! defined total result: out-of-range hotkey positions are no-ops, and
//! budgets too small for any content produce empty output rather than
//! budget-violating lines. Negative widths are never clamped here; callers
//! that compute sizes (fill/percent arithmetic can go negative) are
//! expected to clamp before asking for layout.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("width cannot be negative (got {0})")]
    NegativeWidth(i32),
}

/// Validate a caller-supplied width, converting it to the internal measure.
pub(crate) fn non_negative(width: i32) -> Result<usize, FormatError> {
    usize::try_from(width).map_err(|_| FormatError::NegativeWidth(width))
}
