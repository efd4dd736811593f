//! Autocomplete trie implementations.

mod arena;
mod original;

pub use arena::ArenaTrie;
pub use original::{Trie, TrieNode};

use crate::utils::VariantInfo;

/// Shared contract for the trie variants, so verification and workloads
/// stay generic over the node layout.
pub trait PrefixLookup: Default {
    /// Insert a word (empty words are ignored)
    fn insert(&mut self, word: &str);
    /// Whether the exact word was inserted
    fn contains(&self, word: &str) -> bool;
    /// Sorted remainders of words strictly extending `prefix`, or `None`
    /// if no inserted word starts with it
    fn suffixes(&self, prefix: &str) -> Option<Vec<String>>;
}

/// Type alias for the autocomplete workload signature: insert all words,
/// then query every prefix, returning a scalar workload score.
pub type AutocompleteWorkloadFn = fn(&[String], &[String]) -> f64;

/// Build a trie of `words`, query every prefix, and fold the outcome
/// into a score comparable across variants.
pub fn run_workload<T: PrefixLookup>(words: &[String], prefixes: &[String]) -> f64 {
    let mut trie = T::default();
    for word in words {
        trie.insert(word);
    }

    let mut score = 0usize;
    for prefix in prefixes {
        if trie.contains(prefix) {
            score += 1;
        }
        if let Some(suffixes) = trie.suffixes(prefix) {
            score += suffixes.len();
        }
    }
    score as f64
}

/// Owned-child workload entry point
pub fn autocomplete_original(words: &[String], prefixes: &[String]) -> f64 {
    run_workload::<Trie>(words, prefixes)
}

/// Arena workload entry point
pub fn autocomplete_arena(words: &[String], prefixes: &[String]) -> f64 {
    run_workload::<ArenaTrie>(words, prefixes)
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<AutocompleteWorkloadFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Owned-child nodes in a char-keyed map",
            function: autocomplete_original,
        },
        VariantInfo {
            name: "arena",
            description: "Arena-indexed nodes in a flat Vec",
            function: autocomplete_arena,
        },
    ]
}
