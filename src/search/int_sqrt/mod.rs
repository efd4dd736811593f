//! # Integer Square Root
//!
//! Computes the floored square root of a non-negative integer by binary
//! search over the candidate range `[1, n / 2]`. Negative and non-integer
//! arguments are unrepresentable: the contract takes `u64`.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::Rng;

pub struct IntSqrtRunner;

impl AlgorithmRunner for IntSqrtRunner {
    fn name(&self) -> &'static str {
        "int_sqrt"
    }

    fn description(&self) -> &'static str {
        "Floored integer square root via binary search"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();

        let mut cases: Vec<u64> = vec![0, 1, 2, 3, 4, 5, 24, 25, 26, u32::MAX as u64, u64::MAX];
        for _ in 0..1000 {
            // Mix magnitudes so both tiny and huge arguments are covered
            let bits = rng.random_range(1..64);
            cases.push(rng.random_range(0..u64::MAX) >> bits);
        }

        for variant in code::available_variants() {
            for &n in &cases {
                let root = (variant.function)(n);
                let low = u128::from(root) * u128::from(root);
                let high = (u128::from(root) + 1) * (u128::from(root) + 1);
                if low > u128::from(n) || high <= u128::from(n) {
                    return Err(format!(
                        "Variant '{}' failed verification: sqrt({}) returned {}",
                        variant.name, n, root
                    ));
                }
            }
        }

        Ok(())
    }
}
