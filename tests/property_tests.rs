//! Property-based tests for the calculator's universally quantified rules

use proptest::prelude::*;
use strcalc::{add, Error};

proptest! {
    #[test]
    fn test_comma_and_newline_are_interchangeable(a in 0u32..=1000, b in 0u32..=1000) {
        let comma = add(&format!("{a},{b}")).unwrap();
        let newline = add(&format!("{a}\n{b}")).unwrap();
        prop_assert_eq!(comma, newline);
        prop_assert_eq!(comma, f64::from(a + b));
    }

    #[test]
    fn test_sums_any_list_of_small_numbers(values in prop::collection::vec(0u32..=1000, 1..20)) {
        let input = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        let expected: u32 = values.iter().sum();
        prop_assert_eq!(add(&input).unwrap(), f64::from(expected));
    }

    #[test]
    fn test_values_above_cutoff_never_contribute(a in 0u32..=1000, big in 1001u32..=1_000_000) {
        prop_assert_eq!(add(&format!("{a},{big}")).unwrap(), f64::from(a));
        prop_assert_eq!(add(&format!("{big},{a}")).unwrap(), f64::from(a));
    }

    #[test]
    fn test_negatives_are_reported_in_original_order(
        values in prop::collection::vec(-100i64..=100, 1..20),
    ) {
        let input = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        let negatives: Vec<String> = values
            .iter()
            .filter(|v| **v < 0)
            .map(|v| v.to_string())
            .collect();

        let result = add(&input);
        if negatives.is_empty() {
            let expected: i64 = values.iter().sum();
            prop_assert_eq!(result.unwrap(), expected as f64);
        } else {
            prop_assert_eq!(result, Err(Error::NegativeNumbersNotAllowed { tokens: negatives }));
        }
    }

    #[test]
    fn test_custom_single_character_delimiter_behaves_like_comma(
        a in 0u32..=1000,
        b in 0u32..=1000,
    ) {
        prop_assert_eq!(
            add(&format!("//;\n{a};{b}")).unwrap(),
            add(&format!("{a},{b}")).unwrap()
        );
    }
}
