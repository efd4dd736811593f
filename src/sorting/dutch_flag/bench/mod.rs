//! Benchmark workload for the Dutch flag partition.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

fn generate_colors(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = SeededRng::new(seed);
    (0..size.max(1))
        .map(|_| rng.next_usize_range(3) as u8)
        .collect()
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let colors: Arc<Vec<u8>> = Arc::new(generate_colors(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let colors = Arc::clone(&colors);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    // Sorting mutates, so each sample works on a fresh copy;
                    // the clone happens outside the timed region
                    let mut buf = (*colors).clone();
                    let (elapsed, _) = crate::measure!(std::hint::black_box(func(&mut buf)));
                    let ones = buf.iter().filter(|&&v| v == 1).count();
                    (elapsed, Some(ones as f64))
                }),
            }
        })
        .collect()
}
