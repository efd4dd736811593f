//! Tests for the two-number maximization.

#[cfg(test)]
mod tests {
    use crate::error::InputError;
    use crate::sorting::rearrange_digits::code::*;

    fn sum_of_pair(pair: &(String, String)) -> u64 {
        let parse = |s: &str| {
            if s.is_empty() {
                0
            } else {
                s.parse::<u64>().unwrap()
            }
        };
        parse(&pair.0) + parse(&pair.1)
    }

    #[test]
    fn test_given_cases() {
        let pair = rearrange_digits_original(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(pair, ("531".to_string(), "42".to_string()));
        assert_eq!(sum_of_pair(&pair), 573);

        let pair = rearrange_digits_original(&[4, 6, 2, 5, 9, 8]).unwrap();
        assert_eq!(pair, ("964".to_string(), "852".to_string()));
        assert_eq!(sum_of_pair(&pair), 1816);
    }

    #[test]
    fn test_single_digit() {
        for variant in available_variants() {
            let pair = (variant.function)(&[7]).unwrap();
            assert_eq!(
                pair,
                ("7".to_string(), String::new()),
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&[]),
                Err(InputError::Empty),
                "variant {}",
                variant.name
            );
            assert_eq!(
                (variant.function)(&[1, 2, 14]),
                Err(InputError::NotADigit(14)),
                "variant {}",
                variant.name
            );
        }
    }

    #[test]
    fn test_variants_agree_and_preserve_digits() {
        let digits = [9, 0, 0, 3, 3, 7, 5, 5, 5, 1];

        let expected = rearrange_digits_original(&digits).unwrap();
        let actual = rearrange_digits_counting(&digits).unwrap();
        assert_eq!(actual, expected);

        // Output is a permutation of the input digits
        let mut output: Vec<u8> = expected
            .0
            .bytes()
            .chain(expected.1.bytes())
            .map(|b| b - b'0')
            .collect();
        output.sort_unstable();
        let mut input = digits.to_vec();
        input.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn test_beats_naive_splits_on_small_cases() {
        // The dealt arrangement should never lose to a simple front/back
        // split of the descending digits
        let digits = [4, 6, 2, 5, 9, 8];
        let pair = rearrange_digits_original(&digits).unwrap();

        let mut descending = digits.to_vec();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        let joined: String = descending.iter().map(|d| (b'0' + d) as char).collect();
        let (front, back) = joined.split_at(3);
        let naive = front.parse::<u64>().unwrap() + back.parse::<u64>().unwrap();

        assert!(sum_of_pair(&pair) >= naive);
    }

    #[test]
    fn test_merge_sort_known_cases() {
        for mut values in [vec![3, 2, 1], vec![3, 2], vec![3, 6, 1, 9]] {
            let mut expected = values.clone();
            expected.sort_unstable();
            merge_sort(&mut values);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn test_merge_sort_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        merge_sort(&mut single);
        assert_eq!(single, vec![42]);

        let mut sorted: Vec<i32> = (0..50).collect();
        merge_sort(&mut sorted);
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());

        let mut reversed: Vec<i32> = (0..50).rev().collect();
        merge_sort(&mut reversed);
        assert_eq!(reversed, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_merge_sort_is_idempotent() {
        let mut values = vec![5, 1, 4, 1, 5, 9, 2, 6];
        merge_sort(&mut values);
        let once = values.clone();
        merge_sort(&mut values);
        assert_eq!(values, once);
    }
}
