//! # Autocomplete Trie
//!
//! A character-keyed prefix trie with insert, prefix find, and recursive
//! suffix collection, in two node layouts: owned children (`original`)
//! and an index arena (`arena`).

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;
use std::collections::BTreeSet;

pub struct AutocompleteRunner;

/// Check one trie implementation against a sorted-set reference
fn check_impl<T: PrefixLookup>(name: &str, words: &BTreeSet<String>) -> Result<(), String> {
    let mut trie = T::default();
    for word in words {
        trie.insert(word);
    }

    // Probe every prefix of every word, plus a sibling that was never
    // inserted, and compare against the set
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for cut in 1..=chars.len() {
            let prefix: String = chars[..cut].iter().collect();

            let expected_contains = words.contains(&prefix);
            if trie.contains(&prefix) != expected_contains {
                return Err(format!(
                    "Variant '{}': contains(\"{}\") should be {}",
                    name, prefix, expected_contains
                ));
            }

            let mut expected: Vec<String> = words
                .iter()
                .filter(|w| w.starts_with(&prefix) && w.len() > prefix.len())
                .map(|w| w[prefix.len()..].to_string())
                .collect();
            expected.sort();

            match trie.suffixes(&prefix) {
                Some(actual) if actual == expected => {}
                other => {
                    return Err(format!(
                        "Variant '{}': suffixes(\"{}\") expected {:?}, got {:?}",
                        name, prefix, expected, other
                    ));
                }
            }
        }

        let missing = format!("{}{}", word, '\u{1}');
        if trie.contains(&missing) {
            return Err(format!(
                "Variant '{}': contains reported a word that was never inserted",
                name
            ));
        }
    }

    if trie.suffixes("").is_some() {
        return Err(format!(
            "Variant '{}': the empty prefix must return no match",
            name
        ));
    }

    Ok(())
}

impl AlgorithmRunner for AutocompleteRunner {
    fn name(&self) -> &'static str {
        "autocomplete"
    }

    fn description(&self) -> &'static str {
        "Prefix trie with suffix enumeration"
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
            let mut words = BTreeSet::new();
            for _ in 0..rng.random_range(1..40usize) {
                let len = rng.random_range(1..8usize);
                // A small alphabet forces shared prefixes
                let word: String = (0..len)
                    .map(|_| (b'a' + rng.random_range(0..4u8)) as char)
                    .collect();
                words.insert(word);
            }

            check_impl::<Trie>("original", &words)?;
            check_impl::<ArenaTrie>("arena", &words)?;
        }

        Ok(())
    }
}
