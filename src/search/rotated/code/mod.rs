//! Rotated sorted array search implementations.

mod linear;
mod original;

pub use linear::rotated_search_linear;
pub use original::{find_pivot, rotated_search_original};

use crate::error::InputError;
use crate::utils::VariantInfo;

/// Type alias for the rotated search function signature
pub type RotatedSearchFn = fn(&[i64], i64) -> Result<Option<usize>, InputError>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<RotatedSearchFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Pivot search plus offset-mapped binary search",
            function: rotated_search_original,
        },
        VariantInfo {
            name: "linear",
            description: "Naive linear scan (correctness reference)",
            function: rotated_search_linear,
        },
    ]
}
