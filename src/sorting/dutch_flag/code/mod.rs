//! Dutch national flag partition implementations.

mod counting;
mod original;

pub use counting::sort_012_counting;
pub use original::sort_012_original;

use crate::error::InputError;
use crate::utils::VariantInfo;

/// Type alias for the partition function signature
pub type Sort012Fn = fn(&mut [u8]) -> Result<(), InputError>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<Sort012Fn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Single-pass three-pointer partition",
            function: sort_012_original,
        },
        VariantInfo {
            name: "counting",
            description: "Two-pass color histogram rewrite",
            function: sort_012_counting,
        },
    ]
}
