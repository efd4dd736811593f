//! Two-number maximization implementations.

mod counting;
mod original;

pub use counting::rearrange_digits_counting;
pub use original::{merge_sort, rearrange_digits_original};

use crate::error::InputError;
use crate::utils::VariantInfo;

/// Type alias for the rearrange function signature
pub type RearrangeFn = fn(&[u8]) -> Result<(String, String), InputError>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<RearrangeFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Merge sort then descending interleave",
            function: rearrange_digits_original,
        },
        VariantInfo {
            name: "counting",
            description: "Digit histogram (O(n))",
            function: rearrange_digits_counting,
        },
    ]
}
