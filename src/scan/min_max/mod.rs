//! # Min-Max Scan
//!
//! Simultaneous minimum and maximum of an integer slice in a single
//! traversal, without the standard library's `min`/`max` helpers on the
//! hot path.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;

pub struct MinMaxRunner;

impl AlgorithmRunner for MinMaxRunner {
    fn name(&self) -> &'static str {
        "min_max"
    }

    fn description(&self) -> &'static str {
        "Minimum and maximum in one traversal"
    }

    fn category(&self) -> &'static str {
        "scan"
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
            let values: Vec<i64> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

            let expected = (
                *values.iter().min().unwrap(),
                *values.iter().max().unwrap(),
            );

            for variant in code::available_variants() {
                let actual = (variant.function)(&values)
                    .map_err(|e| format!("variant '{}' failed: {}", variant.name, e))?;
                if actual != expected {
                    return Err(format!(
                        "Variant '{}' failed verification: values {:?}, \
                         expected {:?}, got {:?}",
                        variant.name, values, expected, actual
                    ));
                }
            }
        }

        Ok(())
    }
}
