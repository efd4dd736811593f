//! Counting-sort variant.
//!
//! Digits only span 0..=9, so a histogram replaces the comparison sort
//! and the whole operation runs in O(n).

use crate::error::InputError;

/// Rearrange a digit array into two numbers whose sum is maximal, using a
/// digit histogram. Produces output identical to the merge-sort variant.
///
/// # Errors
/// [`InputError::Empty`] for an empty slice, [`InputError::NotADigit`]
/// if any element exceeds 9.
pub fn rearrange_digits_counting(digits: &[u8]) -> Result<(String, String), InputError> {
    if digits.is_empty() {
        return Err(InputError::Empty);
    }

    let mut counts = [0usize; 10];
    for &d in digits {
        if d > 9 {
            return Err(InputError::NotADigit(d));
        }
        counts[d as usize] += 1;
    }

    let mut first = String::with_capacity(digits.len().div_ceil(2));
    let mut second = String::with_capacity(digits.len() / 2);
    let mut k = 0usize;
    for digit in (0..10u8).rev() {
        for _ in 0..counts[digit as usize] {
            let number = if k % 2 == 0 { &mut first } else { &mut second };
            number.push((b'0' + digit) as char);
            k += 1;
        }
    }

    Ok((first, second))
}
