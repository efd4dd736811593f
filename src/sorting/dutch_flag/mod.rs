//! # Dutch National Flag Partition
//!
//! Sort an array containing only 0, 1, and 2 in a single traversal using
//! a three-pointer partition.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;

pub struct DutchFlagRunner;

impl AlgorithmRunner for DutchFlagRunner {
    fn name(&self) -> &'static str {
        "dutch_flag"
    }

    fn description(&self) -> &'static str {
        "Single-traversal sort of a 0/1/2 array"
    }

    fn category(&self) -> &'static str {
        "sorting"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let len = rng.random_range(1..=256usize);
            let colors: Vec<u8> = (0..len).map(|_| rng.random_range(0..3u8)).collect();

            let mut expected = colors.clone();
            expected.sort_unstable();

            for variant in code::available_variants() {
                let mut actual = colors.clone();
                (variant.function)(&mut actual)
                    .map_err(|e| format!("variant '{}' failed: {}", variant.name, e))?;
                if actual != expected {
                    return Err(format!(
                        "Variant '{}' failed verification: input {:?}, \
                         expected {:?}, got {:?}",
                        variant.name, colors, expected, actual
                    ));
                }
            }
        }

        Ok(())
    }
}
