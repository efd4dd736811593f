//! Min-max scan implementations.

mod fold;
mod original;

pub use fold::min_max_fold;
pub use original::min_max_original;

use crate::error::InputError;
use crate::utils::VariantInfo;

/// Type alias for the min-max function signature
pub type MinMaxFn = fn(&[i64]) -> Result<(i64, i64), InputError>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<MinMaxFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Single traversal with two running extremes",
            function: min_max_original,
        },
        VariantInfo {
            name: "fold",
            description: "Iterator fold",
            function: min_max_fold,
        },
    ]
}
