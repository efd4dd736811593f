//! Tests for the Dutch flag partition.

#[cfg(test)]
mod tests {
    use crate::error::InputError;
    use crate::sorting::dutch_flag::code::*;

    fn check_sorted(variant_name: &str, input: &[u8]) {
        for variant in available_variants() {
            if variant.name != variant_name {
                continue;
            }
            let mut actual = input.to_vec();
            (variant.function)(&mut actual).unwrap();
            let mut expected = input.to_vec();
            expected.sort_unstable();
            assert_eq!(actual, expected, "variant {}, input {:?}", variant_name, input);
        }
    }

    #[test]
    fn test_given_cases() {
        let cases: &[&[u8]] = &[
            &[0, 0, 2, 2, 2, 1, 1, 1, 2, 0, 2],
            &[2, 1, 2, 0, 0, 2, 1, 0, 1, 0, 0, 2, 2, 2, 1, 2, 0, 0, 0, 2, 1, 0, 2, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2],
        ];

        for input in cases {
            check_sorted("original", input);
            check_sorted("counting", input);
        }
    }

    #[test]
    fn test_small_and_uniform_inputs() {
        let cases: &[&[u8]] = &[&[0], &[1, 1], &[2, 1], &[2, 2, 2], &[0, 0, 0], &[2, 0]];
        for input in cases {
            check_sorted("original", input);
            check_sorted("counting", input);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        for variant in available_variants() {
            let mut empty: Vec<u8> = vec![];
            assert_eq!(
                (variant.function)(&mut empty),
                Err(InputError::Empty),
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        for variant in available_variants() {
            let mut values = vec![0, 1, 3, 2];
            assert_eq!(
                (variant.function)(&mut values),
                Err(InputError::NotAFlagColor(3)),
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_counting_leaves_input_untouched_on_error() {
        let mut values = vec![2, 1, 9, 0];
        assert!(sort_012_counting(&mut values).is_err());
        assert_eq!(values, vec![2, 1, 9, 0]);
    }

    #[test]
    fn test_original_is_idempotent() {
        let mut values = vec![2, 0, 1, 2, 0, 1, 1, 2];
        sort_012_original(&mut values).unwrap();
        let once = values.clone();
        sort_012_original(&mut values).unwrap();
        assert_eq!(values, once);
    }
}
