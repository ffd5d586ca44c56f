//! Property tests for trick resolution.

use proptest::prelude::*;

use crate::domain::plays::{compare, Comparison};
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::tricks::{resolve_trick, TrickPlay};

/// Four plays of `size` pieces each, carved from one deal.
fn trick_of_size(size: usize) -> impl Strategy<Value = Vec<TrickPlay>> {
    test_gens::deck_pieces(size * 4).prop_map(move |pieces| {
        pieces
            .chunks(size)
            .enumerate()
            .map(|(seat, chunk)| TrickPlay::new(seat as u8, chunk.to_vec()))
            .collect()
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winner played a valid shape that no other play strictly beats,
    /// and no earlier play ties it.
    #[test]
    fn prop_winner_is_unbeaten(plays in (1usize..=3).prop_flat_map(trick_of_size)) {
        match resolve_trick(&plays) {
            None => {
                prop_assert!(plays.iter().all(|p| !p.kind().is_valid()));
            }
            Some(outcome) => {
                let winner = plays.iter().find(|p| p.seat == outcome.winner).unwrap();
                prop_assert!(winner.kind().is_valid());
                prop_assert_eq!(outcome.piles as usize, winner.pieces.len());
                let winner_pos = plays.iter().position(|p| p.seat == outcome.winner).unwrap();
                for (pos, other) in plays.iter().enumerate() {
                    let cmp = compare(&other.pieces, &winner.pieces);
                    prop_assert_ne!(cmp, Comparison::AWins);
                    if pos < winner_pos {
                        prop_assert_ne!(cmp, Comparison::Tie);
                    }
                }
            }
        }
    }

    /// Single-piece tricks always have a winner: the highest piece.
    #[test]
    fn prop_singles_highest_wins(plays in trick_of_size(1)) {
        let outcome = resolve_trick(&plays).unwrap();
        let best = plays.iter().map(|p| p.pieces[0]).max().unwrap();
        let winner = &plays[outcome.winner as usize];
        prop_assert_eq!(winner.pieces[0], best);
    }
}
