//! Naive linear scan, kept as the correctness reference.

use crate::error::InputError;

/// Find the index of `target` by scanning left to right in O(n).
///
/// # Errors
/// [`InputError::Empty`] if `values` is empty.
pub fn rotated_search_linear(values: &[i64], target: i64) -> Result<Option<usize>, InputError> {
    if values.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(values.iter().position(|&v| v == target))
}
