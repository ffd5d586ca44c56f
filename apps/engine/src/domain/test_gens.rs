// Proptest generators for domain types.
// Hands are drawn from a real deck, so multiplicities never exceed what a
// deal could produce.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::pieces::{Color, Piece, PieceName};

/// Generate a random piece kind
pub fn piece() -> impl Strategy<Value = Piece> {
    let names = prop::sample::select(PieceName::ALL.to_vec());
    let colors = prop_oneof![Just(Color::Red), Just(Color::Black)];
    (names, colors).prop_map(|(name, color)| Piece::new(name, color))
}

/// Generate `count` pieces drawn without replacement from a full deck
pub fn deck_pieces(count: usize) -> impl Strategy<Value = Vec<Piece>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck = full_deck();
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// Generate a hand of 1 to `max_count` deck pieces
pub fn hand_up_to(max_count: usize) -> impl Strategy<Value = Vec<Piece>> {
    (1..=max_count).prop_flat_map(deck_pieces)
}

/// Generate a full 8-piece hand
pub fn full_hand() -> impl Strategy<Value = Vec<Piece>> {
    deck_pieces(8)
}

/// Generate a group of 1 to 6 pieces that all share one color, which is
/// where every valid multi-piece shape lives
pub fn same_color_group() -> impl Strategy<Value = Vec<Piece>> {
    (
        prop_oneof![Just(Color::Red), Just(Color::Black)],
        prop::collection::vec(prop::sample::select(PieceName::ALL.to_vec()), 1..=6),
    )
        .prop_map(|(color, names)| names.into_iter().map(|n| Piece::new(n, color)).collect())
}

/// Generate prior declarations for a declarer at `position`
pub fn prior_declarations(position: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=8u8, position)
}
