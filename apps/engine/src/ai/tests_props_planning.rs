//! Property tests for hand evaluation and declaration planning.

use proptest::prelude::*;

use crate::ai::config::StrategyConfig;
use crate::ai::hand_eval::evaluate;
use crate::ai::planner::{declare, pile_room};
use crate::domain::context::RoundContext;
use crate::domain::declaration::{forbidden_declaration, validate_declaration};
use crate::domain::pieces::Piece;
use crate::domain::test_gens;
use crate::domain::test_prelude;

fn sorted(mut pieces: Vec<Piece>) -> Vec<Piece> {
    pieces.sort();
    pieces
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every declaration the planner produces passes the legality check.
    #[test]
    fn prop_declaration_is_legal(
        hand in test_gens::full_hand(),
        prior in (0usize..=3).prop_flat_map(test_gens::prior_declarations),
        forced in any::<bool>(),
    ) {
        let ctx = RoundContext::new(prior.len() as u8, prior.clone(), prior.is_empty());
        let value = declare(&hand, &ctx, forced, &StrategyConfig::default());
        prop_assert!(validate_declaration(value, &prior, forced).is_ok(), "value {}", value);
        if forced {
            prop_assert!(value >= 1);
        }
    }

    /// Without a rule forcing it up, a declaration stays within the room left.
    #[test]
    fn prop_declaration_within_room(
        hand in test_gens::full_hand(),
        prior in (0usize..=2).prop_flat_map(test_gens::prior_declarations),
    ) {
        let ctx = RoundContext::new(prior.len() as u8, prior.clone(), prior.is_empty());
        let value = declare(&hand, &ctx, false, &StrategyConfig::default());
        prop_assert!(value <= pile_room(&prior));
    }

    /// The last declarer never brings the total to exactly 8.
    #[test]
    fn prop_last_declarer_avoids_eight(
        hand in test_gens::full_hand(),
        prior in test_gens::prior_declarations(3),
        forced in any::<bool>(),
    ) {
        let ctx = RoundContext::new(3, prior.clone(), false);
        let value = declare(&hand, &ctx, forced, &StrategyConfig::default());
        prop_assert_ne!(forbidden_declaration(&prior), Some(value));
        let total: u32 = prior.iter().map(|&d| d as u32).sum::<u32>() + value as u32;
        prop_assert_ne!(total, 8);
    }

    /// Plan roles split the hand exactly, and committed piles fit the target.
    #[test]
    fn prop_plan_partitions_hand(
        hand in test_gens::hand_up_to(8),
        target in -2i16..=8,
    ) {
        let plan = evaluate(&hand, target, None, &StrategyConfig::default());
        let mut roles: Vec<Piece> = plan
            .committed
            .iter()
            .flat_map(|c| c.pieces.iter().copied())
            .collect();
        roles.extend(plan.openers.iter().copied());
        roles.extend(plan.reserve.iter().copied());
        roles.extend(plan.burden.iter().copied());
        prop_assert_eq!(sorted(roles), sorted(hand.clone()));
        prop_assert!(plan.committed_size() as i16 <= target.max(0));
        prop_assert!(plan.reserve.len() <= 2);
        if target <= 0 {
            prop_assert_eq!(plan.burden.len(), hand.len());
        }
    }

    /// Re-evaluating the same hand with its own plan keeps every role.
    #[test]
    fn prop_plan_carries_on_unchanged_hand(
        hand in test_gens::full_hand(),
        target in 1i16..=8,
    ) {
        let cfg = StrategyConfig::default();
        let first = evaluate(&hand, target, None, &cfg);
        let again = evaluate(&hand, target, Some(&first), &cfg);
        prop_assert_eq!(&again.committed, &first.committed);
        prop_assert_eq!(sorted(again.openers.clone()), sorted(first.openers.clone()));
        prop_assert_eq!(sorted(again.reserve.clone()), sorted(first.reserve.clone()));
        prop_assert_eq!(sorted(again.burden.clone()), sorted(first.burden.clone()));
    }
}
