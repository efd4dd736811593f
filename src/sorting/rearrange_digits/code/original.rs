//! Original implementation: merge sort, then interleave from the top.
//!
//! Sorting dominates at O(n log n); building the two numbers is a single
//! O(n) pass over the sorted digits.

use crate::error::InputError;

/// Rearrange a digit array into two numbers whose sum is maximal.
///
/// The numbers are returned as decimal strings so the input length is
/// unbounded. The first number is never shorter than the second; for a
/// single-digit input the second is empty.
///
/// # Errors
/// [`InputError::Empty`] for an empty slice, [`InputError::NotADigit`]
/// if any element exceeds 9.
///
/// # Example
/// ```
/// use algo_workbench::sorting::rearrange_digits::rearrange_digits_original;
///
/// let (first, second) = rearrange_digits_original(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!((first.as_str(), second.as_str()), ("531", "42"));
/// ```
pub fn rearrange_digits_original(digits: &[u8]) -> Result<(String, String), InputError> {
    if digits.is_empty() {
        return Err(InputError::Empty);
    }
    if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
        return Err(InputError::NotADigit(bad));
    }

    let mut sorted = digits.to_vec();
    merge_sort(&mut sorted);

    // Alternate the digits, highest first, between the two numbers
    let mut first = String::with_capacity(sorted.len().div_ceil(2));
    let mut second = String::with_capacity(sorted.len() / 2);
    for (k, &digit) in sorted.iter().rev().enumerate() {
        let number = if k % 2 == 0 { &mut first } else { &mut second };
        number.push((b'0' + digit) as char);
    }

    Ok((first, second))
}

/// Sort a slice ascending by recursively splitting into halves and merging.
pub fn merge_sort<T: Ord + Copy>(values: &mut [T]) {
    if values.len() > 1 {
        sort_range(values, 0, values.len() - 1);
    }
}

fn sort_range<T: Ord + Copy>(values: &mut [T], left: usize, right: usize) {
    // A single element is already sorted
    if left >= right {
        return;
    }

    let mid = (left + right) / 2;
    sort_range(values, left, mid);
    sort_range(values, mid + 1, right);

    merge(values, left, mid, right);
}

/// Merge the two adjacent sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<T: Ord + Copy>(values: &mut [T], left: usize, mid: usize, right: usize) {
    let mut merged = Vec::with_capacity(right - left + 1);
    let mut left_index = left;
    let mut right_index = mid + 1;

    while left_index <= mid && right_index <= right {
        if values[left_index] > values[right_index] {
            merged.push(values[right_index]);
            right_index += 1;
        } else {
            merged.push(values[left_index]);
            left_index += 1;
        }
    }

    merged.extend_from_slice(&values[left_index..=mid]);
    merged.extend_from_slice(&values[right_index..=right]);

    for (i, v) in merged.into_iter().enumerate() {
        values[left + i] = v;
    }
}
