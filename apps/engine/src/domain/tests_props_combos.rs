//! Property tests for combo enumeration.

use proptest::prelude::*;

use crate::domain::combos::{find_all, find_of_size};
use crate::domain::plays::classify;
use crate::domain::test_gens;
use crate::domain::test_prelude;

/// Binomial coefficient, small inputs only.
fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every reported combo is valid and its pieces are the hand's pieces
    /// at its indices.
    #[test]
    fn prop_combos_are_valid_subsets(hand in test_gens::hand_up_to(8)) {
        for combo in find_all(&hand) {
            prop_assert!(combo.kind.is_valid());
            prop_assert_eq!(classify(&combo.pieces), combo.kind);
            prop_assert!(combo.indices.windows(2).all(|w| w[0] < w[1]));
            let at_indices: Vec<_> = combo.indices.iter().map(|&i| hand[i]).collect();
            prop_assert_eq!(&at_indices, &combo.pieces);
            prop_assert!((1..=6).contains(&combo.size()));
        }
    }

    /// Enumeration is exhaustive: singles are every position, and no size
    /// reports more subsets than exist.
    #[test]
    fn prop_enumeration_bounds(hand in test_gens::hand_up_to(8)) {
        prop_assert_eq!(find_of_size(&hand, 1).len(), hand.len());
        for k in 1..=6 {
            prop_assert!(find_of_size(&hand, k).len() <= choose(hand.len(), k));
        }
        let total: usize = (1..=6).map(|k| find_of_size(&hand, k).len()).sum();
        prop_assert_eq!(find_all(&hand).len(), total);
    }
}

#[test]
fn choose_small_values() {
    assert_eq!(choose(8, 0), 1);
    assert_eq!(choose(8, 3), 56);
    assert_eq!(choose(3, 4), 0);
}
