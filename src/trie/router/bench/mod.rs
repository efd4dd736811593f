//! Benchmark workload for the path router.
//!
//! Each sample registers `size` routes and resolves a fixed batch of
//! lookups, half of which miss.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

const LOOKUPS: usize = 64;

fn generate_workload(size: usize, seed: u64) -> (Vec<String>, Vec<String>) {
    let mut rng = SeededRng::new(seed);

    let routes: Vec<String> = (0..size.max(1))
        .map(|_| {
            let depth = 1 + rng.next_usize_range(5);
            let mut path = String::new();
            for _ in 0..depth {
                path.push('/');
                path.push_str(&rng.next_word(6));
            }
            path
        })
        .collect();

    let lookups = (0..LOOKUPS)
        .map(|_| {
            let route = &routes[rng.next_usize_range(routes.len())];
            if rng.next_u64() & 1 == 0 {
                route.clone()
            } else {
                format!("{}/missing", route)
            }
        })
        .collect();

    (routes, lookups)
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let (routes, lookups) = generate_workload(size, seed);
    let routes: Arc<Vec<String>> = Arc::new(routes);
    let lookups: Arc<Vec<String>> = Arc::new(lookups);

    available_variants()
        .into_iter()
        .map(|v| {
            let routes = Arc::clone(&routes);
            let lookups = Arc::clone(&lookups);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, hits) =
                        crate::measure!(std::hint::black_box(func(&routes, &lookups)));
                    (elapsed, Some(hits))
                }),
            }
        })
        .collect()
}
