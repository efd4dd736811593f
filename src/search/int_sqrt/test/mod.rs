//! Tests for the integer square root implementations.

#[cfg(test)]
mod tests {
    use crate::search::int_sqrt::code::*;

    #[test]
    fn test_original_known_values() {
        for (arg, expected) in [(9, 3), (0, 0), (16, 4), (1, 1), (27, 5)] {
            assert_eq!(int_sqrt_original(arg), expected, "sqrt({})", arg);
        }
    }

    #[test]
    fn test_all_variants_floor_property_small_range() {
        for variant in available_variants() {
            for n in 0..=1000u64 {
                let root = (variant.function)(n);
                assert!(
                    root * root <= n && (root + 1) * (root + 1) > n,
                    "variant '{}': sqrt({}) = {}",
                    variant.name,
                    n,
                    root
                );
            }
        }
    }

    #[test]
    fn test_near_perfect_squares() {
        for variant in available_variants() {
            for k in [2u64, 3, 10, 1_000, 1_000_000_000] {
                let sq = k * k;
                assert_eq!((variant.function)(sq - 1), k - 1, "variant {}", variant.name);
                assert_eq!((variant.function)(sq), k, "variant {}", variant.name);
                assert_eq!((variant.function)(sq + 1), k, "variant {}", variant.name);
            }
        }
    }

    #[test]
    fn test_large_arguments() {
        // (10^9)^2 + 1 floors back down to 10^9
        let expected = 1_000_000_000u64;
        let squared = expected * expected + 1;
        for variant in available_variants() {
            assert_eq!((variant.function)(squared), expected, "variant {}", variant.name);
        }
    }

    #[test]
    fn test_u64_max_does_not_overflow() {
        // floor(sqrt(2^64 - 1)) = 2^32 - 1
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(u64::MAX),
                u32::MAX as u64,
                "variant {}",
                variant.name
            );
        }
    }
}
