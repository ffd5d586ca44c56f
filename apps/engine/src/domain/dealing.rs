//! Deterministic dealing of the 32-piece deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::declaration::{PILES_PER_ROUND, PLAYERS};
use super::pieces::{Color, Piece, PieceName};

/// Pieces in a full deck.
pub const DECK_SIZE: usize = 32;

/// Hand size at the start of a round.
pub const HAND_SIZE: usize = PILES_PER_ROUND as usize;

/// Full deck in a fixed order: red before black, highest name first.
pub fn full_deck() -> Vec<Piece> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for name in PieceName::ALL.into_iter().rev() {
            for _ in 0..name.copies_per_color() {
                deck.push(Piece::new(name, color));
            }
        }
    }
    deck
}

/// Shuffle a full deck with `seed` and deal 8 pieces to each seat.
///
/// Hands come back sorted strongest first.
pub fn deal_hands(seed: u64) -> [Vec<Piece>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Piece>; PLAYERS] = Default::default();
    for (seat, chunk) in deck.chunks(HAND_SIZE).enumerate().take(PLAYERS) {
        let mut hand = chunk.to_vec();
        hand.sort_by(|a, b| b.cmp(a));
        hands[seat] = hand;
    }
    hands
}

/// Seat holding the given piece, if any.
pub fn holder_of(hands: &[Vec<Piece>], piece: Piece) -> Option<usize> {
    hands.iter().position(|hand| hand.contains(&piece))
}
