//! Benchmark workload for the two-number maximization.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

fn generate_digits(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = SeededRng::new(seed);
    (0..size.max(1))
        .map(|_| rng.next_usize_range(10) as u8)
        .collect()
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let digits: Arc<Vec<u8>> = Arc::new(generate_digits(size, seed));

    available_variants()
        .into_iter()
        .map(|v| {
            let digits = Arc::clone(&digits);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, pair) = crate::measure!(std::hint::black_box(func(&digits)));
                    // The leading digit is identical across variants, which
                    // makes it a cheap cross-check value
                    let sample = pair
                        .ok()
                        .and_then(|(first, _)| first.bytes().next())
                        .map(|b| (b - b'0') as f64);
                    (elapsed, sample)
                }),
            }
        })
        .collect()
}
