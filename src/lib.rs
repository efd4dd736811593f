//! # Algo-Workbench
//!
//! A collection of textbook algorithm exercises, each implemented in one
//! or more variants, with a shared correctness-verification and
//! benchmarking harness.

pub mod error;
pub mod registry;
pub mod scan;
pub mod search;
pub mod sorting;
pub mod trie;
pub mod utils;

/// Re-export tui from utils for convenience
pub use utils::tui;

pub use error::InputError;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::InputError;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::trie::autocomplete::Trie;
    pub use crate::trie::router::Router;
}
