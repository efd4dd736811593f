//! Tests for the rotated sorted array search.

#[cfg(test)]
mod tests {
    use crate::error::InputError;
    use crate::search::rotated::code::*;

    #[test]
    fn test_given_cases() {
        let cases: &[(&[i64], i64, Option<usize>)] = &[
            (&[6, 7, 8, 9, 10, 1, 2, 3, 4], 6, Some(0)),
            (&[6, 7, 8, 9, 10, 1, 2, 3, 4], 1, Some(5)),
            (&[6, 7, 8, 1, 2, 3, 4], 8, Some(2)),
            (&[6, 7, 8, 1, 2, 3, 4], 1, Some(3)),
            (&[6, 7, 8, 1, 2, 3, 4], 10, None),
        ];

        for &(values, target, expected) in cases {
            assert_eq!(
                rotated_search_original(values, target),
                Ok(expected),
                "values {:?}, target {}",
                values,
                target
            );
        }
    }

    #[test]
    fn test_find_pivot() {
        let cases: &[(&[i64], usize)] = &[
            (&[4, 6, 7, 0, 1, 2], 2),
            (&[4, 5, 6, 7, 1, 2], 3),
            (&[4, 5, 0], 1),
            (&[2, 5, 8], 2),
            (&[8, 1, 5], 0),
            (&[7], 0),
        ];

        for &(values, expected) in cases {
            assert_eq!(find_pivot(values), expected, "values {:?}", values);
        }
    }

    #[test]
    fn test_unrotated_arrays() {
        let cases: &[(&[i64], i64, Option<usize>)] = &[
            (&[1, 2, 3, 4, 6, 7, 8, 9, 10], 1, Some(0)),
            (&[1, 3], 1, Some(0)),
            (&[1, 3], 3, Some(1)),
            (&[3], 3, Some(0)),
            (&[1, 3, 7], 9, None),
        ];

        for &(values, target, expected) in cases {
            assert_eq!(
                rotated_search_original(values, target),
                Ok(expected),
                "values {:?}, target {}",
                values,
                target
            );
        }
    }

    #[test]
    fn test_negative_values() {
        let values = [1, 2, -1];
        assert_eq!(rotated_search_original(&values, 1), Ok(Some(0)));
        assert_eq!(rotated_search_original(&values, -1), Ok(Some(2)));
        assert_eq!(rotated_search_original(&values, -5), Ok(None));
    }

    #[test]
    fn test_empty_input_rejected() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[], 3), Err(InputError::Empty));
        }
    }

    #[test]
    fn test_fully_rotated_and_singleton() {
        // Rotation by one element: worst case for the pivot search
        let mut values: Vec<i64> = (1..100).collect();
        values.push(0);
        assert_eq!(rotated_search_original(&values, 0), Ok(Some(99)));
        assert_eq!(rotated_search_original(&values, 1), Ok(Some(0)));

        assert_eq!(rotated_search_original(&[5], 5), Ok(Some(0)));
        assert_eq!(rotated_search_original(&[5], 4), Ok(None));
    }

    #[test]
    fn test_matches_linear_reference_on_all_rotations() {
        let sorted: Vec<i64> = vec![-7, -3, 0, 2, 5, 9, 12, 20];
        for pivot in 0..sorted.len() {
            let mut values = sorted[pivot..].to_vec();
            values.extend_from_slice(&sorted[..pivot]);

            for target in -8..22i64 {
                let expected = rotated_search_linear(&values, target).unwrap();
                let actual = rotated_search_original(&values, target).unwrap();
                assert_eq!(actual, expected, "rotation {}, target {}", pivot, target);
            }
        }
    }
}
