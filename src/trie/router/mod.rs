//! # Path Router
//!
//! A segment-keyed route trie with handler values and a router facade
//! that falls back to a configured error handler on misses.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;
use std::collections::HashMap;

pub struct RouterRunner;

/// Check one router implementation against a map reference
fn check_impl<T: PathRoutes>(
    name: &str,
    routes: &HashMap<String, String>,
    probes: &[String],
) -> Result<(), String> {
    let mut router = T::with_handlers("root".to_string(), "error".to_string());
    for (path, handler) in routes {
        router
            .add(path, handler.clone())
            .map_err(|e| format!("Variant '{}': add(\"{}\") failed: {}", name, path, e))?;
    }

    for probe in probes {
        let trimmed = probe.trim_matches('/');
        let expected = if trimmed.is_empty() {
            "root"
        } else {
            routes.get(trimmed).map(String::as_str).unwrap_or("error")
        };

        let actual = router.route(probe);
        if actual != expected {
            return Err(format!(
                "Variant '{}': route(\"{}\") expected \"{}\", got \"{}\"",
                name, probe, expected, actual
            ));
        }
    }

    Ok(())
}

impl AlgorithmRunner for RouterRunner {
    fn name(&self) -> &'static str {
        "router"
    }

    fn description(&self) -> &'static str {
        "Trie-based path routing with error-handler fallback"
    }

    fn category(&self) -> &'static str {
        "trie"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();

        for _ in 0..20 {
            // Random nested paths with handlers on every other depth,
            // keyed by their normalized form
            let mut routes = HashMap::new();
            let mut probes = Vec::new();

            for chain in 0..rng.random_range(1..8usize) {
                let depth = rng.random_range(1..6usize);
                let mut path = String::new();
                for level in 0..depth {
                    path.push_str(&format!("/c{}s{}", chain, level));
                    let normalized = path.trim_matches('/').to_string();
                    if level % 2 == 0 {
                        routes.insert(normalized, format!("h-{}-{}", chain, level));
                    }
                    probes.push(path.clone());
                    probes.push(format!("{}/", path));
                    probes.push(format!("//{}//", path));
                }
                probes.push(format!("{}/unknown", path));
            }
            probes.push("/".to_string());
            probes.push("".to_string());

            check_impl::<Router<String>>("original", &routes, &probes)?;
            check_impl::<ArenaRouter<String>>("arena", &routes, &probes)?;
        }

        Ok(())
    }
}
