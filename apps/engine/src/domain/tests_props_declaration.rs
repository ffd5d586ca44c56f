//! Property tests for declaration legality.

use proptest::prelude::*;

use crate::domain::declaration::{
    forbidden_declaration, legal_declarations, must_declare_nonzero, validate_declaration,
    PILES_PER_ROUND,
};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::errors::domain::{DomainError, ValidationKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// legal_declarations and validate_declaration agree on every value.
    #[test]
    fn prop_legal_list_matches_validation(
        prior in (0usize..=3).prop_flat_map(test_gens::prior_declarations),
        forced in any::<bool>(),
    ) {
        let legal = legal_declarations(&prior, forced);
        for value in 0..=PILES_PER_ROUND {
            let ok = validate_declaration(value, &prior, forced).is_ok();
            prop_assert_eq!(ok, legal.contains(&value), "value {}", value);
        }
        prop_assert!(!legal.is_empty());
    }

    /// The last declarer can never bring the total to exactly 8.
    #[test]
    fn prop_last_declarer_never_totals_eight(
        prior in test_gens::prior_declarations(3),
        forced in any::<bool>(),
    ) {
        let total: u32 = prior.iter().map(|&d| d as u32).sum();
        for value in legal_declarations(&prior, forced) {
            prop_assert_ne!(total + value as u32, PILES_PER_ROUND as u32);
        }
        prop_assert_eq!(
            forbidden_declaration(&prior).is_some(),
            total <= PILES_PER_ROUND as u32
        );
    }

    /// Out-of-range declarations are rejected as InvalidDeclaration.
    #[test]
    fn prop_out_of_range_rejected(value in 9u8..=255u8) {
        let result = validate_declaration(value, &[], false);
        match result {
            Err(DomainError::Validation(kind, _)) => {
                prop_assert_eq!(kind, ValidationKind::InvalidDeclaration);
            }
            other => prop_assert!(false, "expected validation error, got {:?}", other),
        }
    }

    /// Any nonzero declaration in the last two rounds lifts the obligation.
    #[test]
    fn prop_nonzero_resets_zero_streak(
        history in prop::collection::vec(0u8..=8u8, 0..6),
        recent in 1u8..=8u8,
    ) {
        let mut with_recent = history.clone();
        with_recent.push(recent);
        prop_assert!(!must_declare_nonzero(&with_recent));
        with_recent.push(0);
        prop_assert!(!must_declare_nonzero(&with_recent));
        with_recent.push(0);
        prop_assert!(must_declare_nonzero(&with_recent));
    }
}
