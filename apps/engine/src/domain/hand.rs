//! Hand operations: removing played pieces and picking raw pieces by index.

use super::pieces::Piece;
use crate::errors::domain::{DomainError, ValidationKind};

/// Remove exactly the played pieces from the hand (multiset semantics).
///
/// Fails without touching the hand if any played piece is missing.
pub fn remove_played(hand: &mut Vec<Piece>, played: &[Piece]) -> Result<(), DomainError> {
    let mut remaining = hand.clone();
    for piece in played {
        let pos = remaining.iter().position(|p| p == piece).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PieceNotInHand,
                format!("Piece not in hand: {piece}"),
            )
        })?;
        remaining.remove(pos);
    }
    *hand = remaining;
    Ok(())
}

/// True if `pieces` is a sub-multiset of `hand`.
pub fn contains_all(hand: &[Piece], pieces: &[Piece]) -> bool {
    let mut scratch = hand.to_vec();
    remove_played(&mut scratch, pieces).is_ok()
}

/// Pieces at the given hand positions, in the given order.
pub fn take_indices(hand: &[Piece], indices: &[usize]) -> Result<Vec<Piece>, DomainError> {
    let mut seen = vec![false; hand.len()];
    indices
        .iter()
        .map(|&i| match seen.get_mut(i) {
            Some(flag) if !*flag => {
                *flag = true;
                Ok(hand[i])
            }
            Some(_) => Err(DomainError::validation(
                ValidationKind::PieceNotInHand,
                format!("Index {i} requested twice"),
            )),
            None => Err(DomainError::validation(
                ValidationKind::PieceNotInHand,
                format!("Index {i} out of range for hand of {}", hand.len()),
            )),
        })
        .collect()
}

/// Positions of the `count` lowest-point pieces, ascending by position.
/// Ties go to the earlier position.
pub fn weakest_indices(hand: &[Piece], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..hand.len()).collect();
    order.sort_by_key(|&i| (hand[i].point(), i));
    order.truncate(count);
    order.sort_unstable();
    order
}

/// The `count` lowest-point pieces in hand order.
pub fn weakest_pieces(hand: &[Piece], count: usize) -> Vec<Piece> {
    weakest_indices(hand, count)
        .into_iter()
        .map(|i| hand[i])
        .collect()
}
