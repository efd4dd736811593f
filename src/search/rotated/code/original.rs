//! Original implementation of the rotated sorted array search.
//!
//! Locates the rotation pivot with a modified binary search, then runs a
//! standard binary search over logical indices mapped through the pivot.
//! Unlike a copy-and-search approach this never allocates.

use crate::error::InputError;

/// Find the index of `target` in a rotated sorted array of distinct
/// integers in O(log n).
///
/// Returns `Ok(None)` when the value is absent.
///
/// # Errors
/// [`InputError::Empty`] if `values` is empty.
///
/// # Example
/// ```
/// use algo_workbench::search::rotated::rotated_search_original;
///
/// let values = [6, 7, 8, 1, 2, 3, 4];
/// assert_eq!(rotated_search_original(&values, 8), Ok(Some(2)));
/// assert_eq!(rotated_search_original(&values, 10), Ok(None));
/// ```
pub fn rotated_search_original(values: &[i64], target: i64) -> Result<Option<usize>, InputError> {
    if values.is_empty() {
        return Err(InputError::Empty);
    }

    let n = values.len();
    let pivot = find_pivot(values);
    Ok(search_logical(values, target, pivot, 0, n - 1))
}

/// Find the pivot of a rotated sorted array: the index of the maximal
/// element, immediately preceding the minimum. For an unrotated array
/// this is the last index.
///
/// Assumes distinct values.
///
/// # Panics
/// Panics if `values` is empty.
pub fn find_pivot(values: &[i64]) -> usize {
    pivot_search(values, 0, values.len() - 1)
}

fn pivot_search(values: &[i64], left: usize, right: usize) -> usize {
    // Ascending across the bounds means this span holds no rotation
    if values[right] > values[left] {
        return right;
    }

    if right - left <= 1 {
        return left;
    }

    let mid = (left + right) / 2;

    // Elements below the first element sit after the pivot
    if values[mid] < values[0] {
        pivot_search(values, left, mid)
    } else {
        pivot_search(values, mid, right)
    }
}

/// Binary search over logical indices; logical `i` maps to physical
/// `(pivot + 1 + i) % n`, which walks the array in sorted order.
fn search_logical(
    values: &[i64],
    target: i64,
    pivot: usize,
    left: usize,
    right: usize,
) -> Option<usize> {
    let n = values.len();
    let physical = |i: usize| (pivot + 1 + i) % n;

    if right - left <= 1 {
        if values[physical(left)] == target {
            return Some(physical(left));
        }
        if values[physical(right)] == target {
            return Some(physical(right));
        }
        return None;
    }

    let mid = (left + right) / 2;
    let value = values[physical(mid)];

    if value == target {
        return Some(physical(mid));
    }

    if value > target {
        search_logical(values, target, pivot, left, mid - 1)
    } else {
        search_logical(values, target, pivot, mid + 1, right)
    }
}
