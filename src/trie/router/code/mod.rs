//! Path router implementations.

mod arena;
mod original;

pub use arena::ArenaRouter;
pub use original::{RouteTrie, RouteTrieNode, Router};

use crate::error::InputError;
use crate::utils::VariantInfo;

/// Shared contract for the router variants.
pub trait PathRoutes: Sized {
    /// Construct with a root handler (for `/`) and an error handler
    fn with_handlers(root_handler: String, error_handler: String) -> Self;
    /// Register a handler for a path
    fn add(&mut self, path: &str, handler: String) -> Result<(), InputError>;
    /// Resolve a path to a handler, falling back to the error handler
    fn route(&self, path: &str) -> &str;
}

const ERROR_HANDLER: &str = "404";

/// Type alias for the router workload signature: register all routes,
/// then resolve every lookup, returning the hit count.
pub type RouterWorkloadFn = fn(&[String], &[String]) -> f64;

/// Build a router over `routes`, resolve every lookup, count the hits.
pub fn run_workload<T: PathRoutes>(routes: &[String], lookups: &[String]) -> f64 {
    let mut router = T::with_handlers("root".to_string(), ERROR_HANDLER.to_string());
    for (i, route) in routes.iter().enumerate() {
        // Workload paths are pre-validated; skip degenerate ones anyway
        let _ = router.add(route, format!("handler-{}", i));
    }

    lookups
        .iter()
        .filter(|path| router.route(path) != ERROR_HANDLER)
        .count() as f64
}

/// Owned-child workload entry point
pub fn router_original(routes: &[String], lookups: &[String]) -> f64 {
    run_workload::<Router<String>>(routes, lookups)
}

/// Arena workload entry point
pub fn router_arena(routes: &[String], lookups: &[String]) -> f64 {
    run_workload::<ArenaRouter<String>>(routes, lookups)
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<RouterWorkloadFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Owned-child nodes in a segment-keyed map",
            function: router_original,
        },
        VariantInfo {
            name: "arena",
            description: "Arena-indexed nodes in a flat Vec",
            function: router_arena,
        },
    ]
}
