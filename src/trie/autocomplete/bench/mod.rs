//! Benchmark workload for the autocomplete trie.
//!
//! Each sample builds the trie from scratch and runs a fixed batch of
//! prefix queries, so the measurement covers insert and lookup together.

use super::code::available_variants;
use crate::registry::VariantClosure;
use crate::utils::bench::SeededRng;
use std::sync::Arc;

const QUERIES: usize = 64;

fn generate_workload(size: usize, seed: u64) -> (Vec<String>, Vec<String>) {
    let mut rng = SeededRng::new(seed);
    let words: Vec<String> = (0..size.max(1)).map(|_| rng.next_word(12)).collect();

    let prefixes = (0..QUERIES)
        .map(|_| {
            let word = &words[rng.next_usize_range(words.len())];
            let chars: Vec<char> = word.chars().collect();
            let cut = 1 + rng.next_usize_range(chars.len());
            chars[..cut].iter().collect()
        })
        .collect();

    (words, prefixes)
}

/// Build measurement closures for every variant
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let (words, prefixes) = generate_workload(size, seed);
    let words: Arc<Vec<String>> = Arc::new(words);
    let prefixes: Arc<Vec<String>> = Arc::new(prefixes);

    available_variants()
        .into_iter()
        .map(|v| {
            let words = Arc::clone(&words);
            let prefixes = Arc::clone(&prefixes);
            let func = v.function;

            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, score) =
                        crate::measure!(std::hint::black_box(func(&words, &prefixes)));
                    (elapsed, Some(score))
                }),
            }
        })
        .collect()
}
