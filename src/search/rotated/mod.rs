//! # Rotated Sorted Array Search
//!
//! O(log n) lookup in a sorted array that has been rotated by an unknown
//! offset: find the pivot first, then binary-search with index offsets
//! mapped through it. Assumes distinct values.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;

pub struct RotatedSearchRunner;

impl AlgorithmRunner for RotatedSearchRunner {
    fn name(&self) -> &'static str {
        "rotated_search"
    }

    fn description(&self) -> &'static str {
        "Binary search in a rotated sorted array"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let len = rng.random_range(1..=64usize);

            // Distinct ascending values, then rotate at a random point
            let mut value = rng.random_range(-1000..1000i64);
            let sorted: Vec<i64> = (0..len)
                .map(|_| {
                    value += rng.random_range(1..4i64);
                    value
                })
                .collect();
            let pivot = rng.random_range(0..len);
            let mut values = sorted[pivot..].to_vec();
            values.extend_from_slice(&sorted[..pivot]);

            for _ in 0..16 {
                let target = sorted[rng.random_range(0..len)] + rng.random_range(-1..2i64);

                let expected = rotated_search_linear(&values, target)
                    .map_err(|e| format!("linear reference failed: {}", e))?;

                for variant in code::available_variants() {
                    let actual = (variant.function)(&values, target)
                        .map_err(|e| format!("variant '{}' failed: {}", variant.name, e))?;
                    if actual != expected {
                        return Err(format!(
                            "Variant '{}' failed verification: values {:?}, target {}, \
                             expected {:?}, got {:?}",
                            variant.name, values, target, expected, actual
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
