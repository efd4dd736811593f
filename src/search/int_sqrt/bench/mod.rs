//! Benchmark workload for the integer square root.
//!
//! `size` scales the magnitude of the argument rather than a slice length:
//! each sample computes a fixed-length batch of roots of values near
//! `size²`, so measured growth tracks the logarithm of the argument.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

const BATCH: usize = 256;

/// Generate a batch of arguments in [size²/2, size²]
fn generate_values(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = SeededRng::new(seed);
    let max = (size as u64).saturating_mul(size as u64).max(2);
    (0..BATCH)
        .map(|_| max / 2 + rng.next_u64_range(max / 2 + 1))
        .collect()
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let values: Arc<Vec<u64>> = Arc::new(generate_values(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let values = Arc::clone(&values);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, total) = crate::measure!({
                        let mut total = 0u64;
                        for &n in values.iter() {
                            total = total.wrapping_add(std::hint::black_box(func(n)));
                        }
                        total
                    });
                    (elapsed, Some(total as f64))
                }),
            }
        })
        .collect()
}
