//! Property tests for the turn strategist.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::config::StrategyConfig;
use crate::ai::turn::{choose_play, PlayReason};
use crate::domain::combos::find_of_size;
use crate::domain::context::TurnContext;
use crate::domain::hand::{contains_all, weakest_pieces};
use crate::domain::pieces::{point_sum, Piece};
use crate::domain::plays::{beats, classify};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::tricks::{would_win, TrickPlay};

/// A responder's hand, the size of the trick and the leading play.
fn responder_setup() -> impl Strategy<Value = (Vec<Piece>, usize, Vec<Piece>)> {
    test_gens::hand_up_to(8).prop_flat_map(|hand| {
        let max = hand.len().min(6);
        (Just(hand), 1..=max).prop_flat_map(|(hand, k)| {
            (Just(hand), Just(k), test_gens::deck_pieces(k))
        })
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Responders play exactly the required number of pieces from hand.
    #[test]
    fn prop_responder_plays_required_size(
        (hand, k, lead) in responder_setup(),
        captured in 0u8..=8,
        declared in 0u8..=8,
        seed in any::<u64>(),
    ) {
        let ctx = TurnContext::responder(1, k)
            .with_tally(1, captured, declared)
            .with_plays(vec![TrickPlay::new(0, lead)]);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decision = choose_play(&hand, &ctx, None, &StrategyConfig::default(), &mut rng)
            .unwrap();
        prop_assert_eq!(decision.pieces.len(), k);
        prop_assert!(contains_all(&hand, &decision.pieces));
    }

    /// Starters always lead a valid play from hand.
    #[test]
    fn prop_starter_leads_valid_play(
        hand in test_gens::hand_up_to(8),
        captured in 0u8..=8,
        declared in 0u8..=8,
        seed in any::<u64>(),
    ) {
        let ctx = TurnContext::starter(0).with_tally(0, captured, declared);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decision = choose_play(&hand, &ctx, None, &StrategyConfig::default(), &mut rng)
            .unwrap();
        prop_assert!(classify(&decision.pieces).is_valid());
        prop_assert!(contains_all(&hand, &decision.pieces));
    }

    /// Once the declaration is met, the play has the lowest possible point sum.
    #[test]
    fn prop_overcapture_minimizes_points(
        (hand, k, lead) in responder_setup(),
        declared in 0u8..=4,
        extra in 0u8..=3,
    ) {
        let ctx = TurnContext::responder(1, k)
            .with_tally(1, declared + extra, declared)
            .with_plays(vec![TrickPlay::new(0, lead)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let decision = choose_play(&hand, &ctx, None, &StrategyConfig::default(), &mut rng)
            .unwrap();
        prop_assert_eq!(decision.reason, PlayReason::OvercaptureAvoidance);
        prop_assert_eq!(
            point_sum(&decision.pieces),
            point_sum(&weakest_pieces(&hand, k))
        );
    }

    /// When the leader is one trick short of their exact declaration and the
    /// hand can beat them, the chosen play wins the trick.
    #[test]
    fn prop_disruption_takes_the_trick(
        (hand, k, lead) in responder_setup(),
        captured in 0u8..=4,
        my_captured in 0u8..=8,
        my_declared in 0u8..=8,
    ) {
        let can_beat = find_of_size(&hand, k).iter().any(|c| beats(&c.pieces, &lead));
        let plays = vec![TrickPlay::new(0, lead)];
        let ctx = TurnContext::responder(1, k)
            .with_tally(0, captured, captured + k as u8)
            .with_tally(1, my_captured, my_declared)
            .with_plays(plays.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let decision = choose_play(&hand, &ctx, None, &StrategyConfig::default(), &mut rng)
            .unwrap();
        if can_beat {
            prop_assert_eq!(decision.reason, PlayReason::Disruption);
            prop_assert!(would_win(&plays, &decision.pieces));
        } else {
            prop_assert_ne!(decision.reason, PlayReason::Disruption);
        }
    }
}
