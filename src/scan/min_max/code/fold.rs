//! Iterator fold variant.

use crate::error::InputError;

/// Return `(min, max)` of a slice by folding over it.
///
/// # Errors
/// [`InputError::Empty`] if `values` is empty.
pub fn min_max_fold(values: &[i64]) -> Result<(i64, i64), InputError> {
    let first = *values.first().ok_or(InputError::Empty)?;

    Ok(values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
