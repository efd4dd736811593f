//! Benchmark workload for the rotated sorted array search.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

const TARGETS: usize = 64;

/// Build a rotated array of `size` distinct ascending integers plus a
/// batch of lookup targets (present and absent values mixed)
fn generate_workload(size: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = SeededRng::new(seed);
    let size = size.max(1);

    // Strictly increasing values with gaps, so misses exist between hits
    let mut sorted = Vec::with_capacity(size);
    let mut value: i64 = rng.next_i64_centered(1000);
    for _ in 0..size {
        value += 1 + rng.next_u64_range(3) as i64;
        sorted.push(value);
    }

    let pivot = rng.next_usize_range(size);
    let mut rotated = Vec::with_capacity(size);
    rotated.extend_from_slice(&sorted[pivot..]);
    rotated.extend_from_slice(&sorted[..pivot]);

    let targets = (0..TARGETS)
        .map(|_| {
            let candidate = sorted[rng.next_usize_range(size)];
            // Half the targets land in the gaps
            if rng.next_u64() & 1 == 0 {
                candidate
            } else {
                candidate + 1
            }
        })
        .collect();

    (rotated, targets)
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let (values, targets) = generate_workload(size, seed);
    let values: Arc<Vec<i64>> = Arc::new(values);
    let targets: Arc<Vec<i64>> = Arc::new(targets);

    available_variants()
        .into_iter()
        .map(|v| {
            let values = Arc::clone(&values);
            let targets = Arc::clone(&targets);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, found) = crate::measure!({
                        let mut found = 0u32;
                        for &target in targets.iter() {
                            if let Ok(Some(_)) = std::hint::black_box(func(&values, target)) {
                                found += 1;
                            }
                        }
                        found
                    });
                    (elapsed, Some(found as f64))
                }),
            }
        })
        .collect()
}
