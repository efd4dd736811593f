//! Integer square root implementations.

mod iterative;
mod newton;
mod original;

pub use iterative::int_sqrt_iterative;
pub use newton::int_sqrt_newton;
pub use original::int_sqrt_original;

use crate::utils::VariantInfo;

/// Type alias for the integer square root function signature
pub type IntSqrtFn = fn(u64) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<IntSqrtFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Recursive binary search over [1, n/2]",
            function: int_sqrt_original,
        },
        VariantInfo {
            name: "iterative",
            description: "Iterative binary search",
            function: int_sqrt_iterative,
        },
        VariantInfo {
            name: "newton",
            description: "Integer Newton iteration",
            function: int_sqrt_newton,
        },
    ]
}
