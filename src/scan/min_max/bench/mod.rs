//! Benchmark workload for the min-max scan.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

fn generate_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = SeededRng::new(seed);
    (0..size.max(1))
        .map(|_| rng.next_i64_centered(1_000_000))
        .collect()
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let values: Arc<Vec<i64>> = Arc::new(generate_values(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let values = Arc::clone(&values);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, extremes) =
                        crate::measure!(std::hint::black_box(func(&values)));
                    let sample = extremes.ok().map(|(lo, hi)| (hi - lo) as f64);
                    (elapsed, sample)
                }),
            }
        })
        .collect()
}
