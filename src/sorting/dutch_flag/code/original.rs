//! Original implementation: single-pass three-way partition.
//!
//! Three pointers: `low` bounds the settled zeros, `high` bounds the
//! settled twos, `i` scans between them. Values swapped in from the high
//! end are re-examined before the scan advances.

use crate::error::InputError;

/// Sort a slice of 0/1/2 values in place in a single traversal.
///
/// # Errors
/// [`InputError::Empty`] for an empty slice. [`InputError::NotAFlagColor`]
/// on the first out-of-range value; the slice may already be partially
/// permuted when that happens.
///
/// # Example
/// ```
/// use algo_workbench::sorting::dutch_flag::sort_012_original;
///
/// let mut values = [2, 0, 1, 0, 2, 1];
/// sort_012_original(&mut values).unwrap();
/// assert_eq!(values, [0, 0, 1, 1, 2, 2]);
/// ```
pub fn sort_012_original(values: &mut [u8]) -> Result<(), InputError> {
    if values.is_empty() {
        return Err(InputError::Empty);
    }

    let mut i = 0usize;
    let mut low = 0usize;
    let mut high = values.len() - 1;

    while i <= high {
        match values[i] {
            0 => {
                values.swap(i, low);
                low += 1;
                // The scan never trails the zero boundary
                i = i.max(low);
            }
            1 => {
                i += 1;
            }
            2 => {
                values.swap(i, high);
                if high == 0 {
                    break;
                }
                high -= 1;
            }
            other => return Err(InputError::NotAFlagColor(other)),
        }
    }

    Ok(())
}
