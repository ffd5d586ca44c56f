//! Property tests for play classification and ranking.

use proptest::prelude::*;

use crate::domain::plays::{classify, compare, rank_value, Comparison, PlayType};
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Classification depends on the multiset, not the order.
    #[test]
    fn prop_classify_ignores_order(group in test_gens::same_color_group()) {
        let kind = classify(&group);
        let mut reversed = group.clone();
        reversed.reverse();
        let mut sorted = group.clone();
        sorted.sort();
        prop_assert_eq!(classify(&reversed), kind);
        prop_assert_eq!(classify(&sorted), kind);
    }

    /// Every valid shape has the piece count its definition requires.
    #[test]
    fn prop_shape_matches_size(group in test_gens::hand_up_to(6)) {
        let expected_sizes: &[usize] = match classify(&group) {
            PlayType::Single => &[1],
            PlayType::Pair => &[2],
            PlayType::ThreeOfAKind | PlayType::Straight => &[3],
            PlayType::FourOfAKind | PlayType::ExtendedStraight => &[4],
            PlayType::FiveOfAKind | PlayType::ExtendedStraight5 => &[5],
            PlayType::DoubleStraight => &[6],
            PlayType::Invalid => &[1, 2, 3, 4, 5, 6],
        };
        prop_assert!(expected_sizes.contains(&group.len()));
        if group.len() == 1 {
            prop_assert_eq!(classify(&group), PlayType::Single);
        }
    }

    /// compare(a, b) is the mirror image of compare(b, a).
    #[test]
    fn prop_compare_antisymmetric(
        a in test_gens::same_color_group(),
        b in test_gens::same_color_group(),
    ) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).flip());
    }

    /// Comparisons exist only between equal valid shapes.
    #[test]
    fn prop_compare_needs_equal_shapes(
        a in test_gens::hand_up_to(6),
        b in test_gens::hand_up_to(6),
    ) {
        let (ka, kb) = (classify(&a), classify(&b));
        let result = compare(&a, &b);
        if ka != kb || ka == PlayType::Invalid {
            prop_assert_eq!(result, Comparison::Incomparable);
        } else {
            prop_assert_ne!(result, Comparison::Incomparable);
            let expected = match rank_value(ka, &a).cmp(&rank_value(kb, &b)) {
                std::cmp::Ordering::Greater => Comparison::AWins,
                std::cmp::Ordering::Less => Comparison::BWins,
                std::cmp::Ordering::Equal => Comparison::Tie,
            };
            prop_assert_eq!(result, expected);
        }
    }

    /// A play always ties with itself when valid.
    #[test]
    fn prop_compare_reflexive_tie(group in test_gens::same_color_group()) {
        let expected = if classify(&group).is_valid() {
            Comparison::Tie
        } else {
            Comparison::Incomparable
        };
        prop_assert_eq!(compare(&group, &group), expected);
    }
}
