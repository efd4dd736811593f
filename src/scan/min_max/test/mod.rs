//! Tests for the min-max scan.

#[cfg(test)]
mod tests {
    use crate::error::InputError;
    use crate::scan::min_max::code::*;

    #[test]
    fn test_known_cases() {
        let cases: &[(&[i64], (i64, i64))] = &[
            (&[0], (0, 0)),
            (&[1, 1], (1, 1)),
            (&[2, 1], (1, 2)),
            (&[2, 2, 2], (2, 2)),
            (&[-1], (-1, -1)),
            (&[-1, -3, 0], (-3, 0)),
            (&[9, 0, 4, 7, 2], (0, 9)),
        ];

        for variant in available_variants() {
            for &(values, expected) in cases {
                assert_eq!(
                    (variant.function)(values),
                    Ok(expected),
                    "variant {}, values {:?}",
                    variant.name,
                    values
                );
            }
        }
    }

    #[test]
    fn test_shuffled_range() {
        // 0..10 in any order always yields (0, 9)
        let values = [3, 7, 1, 9, 0, 5, 8, 2, 6, 4];
        assert_eq!(min_max_original(&values), Ok((0, 9)));
        assert_eq!(min_max_fold(&values), Ok((0, 9)));
    }

    #[test]
    fn test_extreme_values() {
        let values = [i64::MAX, 0, i64::MIN];
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&values),
                Ok((i64::MIN, i64::MAX)),
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&[]),
                Err(InputError::Empty),
                "variant {}",
                variant.name
            );
        }
    }
}
