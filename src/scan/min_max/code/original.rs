//! Original implementation: single traversal, two running extremes.

use crate::error::InputError;

/// Return `(min, max)` of a slice in one traversal.
///
/// # Errors
/// [`InputError::Empty`] if `values` is empty.
///
/// # Example
/// ```
/// use algo_workbench::scan::min_max::min_max_original;
///
/// assert_eq!(min_max_original(&[3, -1, 7, 0]), Ok((-1, 7)));
/// ```
pub fn min_max_original(values: &[i64]) -> Result<(i64, i64), InputError> {
    let first = *values.first().ok_or(InputError::Empty)?;

    let mut min_value = first;
    let mut max_value = first;
    for &v in values {
        if v < min_value {
            min_value = v;
        } else if v > max_value {
            max_value = v;
        }
    }

    Ok((min_value, max_value))
}
