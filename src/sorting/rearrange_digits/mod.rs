//! # Two-Number Maximization
//!
//! Rearrange the digits of an array into two numbers such that their sum
//! is maximal: sort, then deal the digits highest-first alternately
//! between the two numbers.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;

pub struct RearrangeDigitsRunner;

impl AlgorithmRunner for RearrangeDigitsRunner {
    fn name(&self) -> &'static str {
        "rearrange_digits"
    }

    fn description(&self) -> &'static str {
        "Split digits into two numbers maximizing their sum"
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
            let len = rng.random_range(1..=200usize);
            let digits: Vec<u8> = (0..len).map(|_| rng.random_range(0..10u8)).collect();

            let expected = rearrange_digits_original(&digits)
                .map_err(|e| format!("original failed: {}", e))?;

            for variant in code::available_variants() {
                if variant.name == "original" {
                    continue;
                }

                let actual = (variant.function)(&digits)
                    .map_err(|e| format!("variant '{}' failed: {}", variant.name, e))?;
                if actual != expected {
                    return Err(format!(
                        "Variant '{}' failed verification: digits {:?}, \
                         expected {:?}, got {:?}",
                        variant.name, digits, expected, actual
                    ));
                }
            }
        }

        Ok(())
    }
}
