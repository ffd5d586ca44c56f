//! Trick resolution: who takes the piles once every play is in.

use serde::{Deserialize, Serialize};

use super::pieces::Piece;
use super::plays::{classify, compare, Comparison, PlayType};

/// Seat index, 0..=3.
pub type Seat = u8;

/// One player's contribution to a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub seat: Seat,
    pub pieces: Vec<Piece>,
}

impl TrickPlay {
    pub fn new(seat: Seat, pieces: Vec<Piece>) -> Self {
        Self { seat, pieces }
    }

    pub fn kind(&self) -> PlayType {
        classify(&self.pieces)
    }
}

/// Result of a resolved trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickOutcome {
    pub winner: Seat,
    pub kind: PlayType,
    /// Piles credited to the winner: the number of pieces they played.
    pub piles: u8,
}

/// The play currently winning the trick, if any play is valid.
///
/// The first valid play in order sets the contested shape; only plays of
/// that shape compete, and a later play must strictly beat the leader.
pub fn current_leader(plays: &[TrickPlay]) -> Option<&TrickPlay> {
    let mut leader: Option<(&TrickPlay, PlayType)> = None;
    for play in plays {
        let kind = play.kind();
        if !kind.is_valid() {
            continue;
        }
        match leader {
            None => leader = Some((play, kind)),
            Some((best, best_kind)) => {
                if kind == best_kind && compare(&play.pieces, &best.pieces) == Comparison::AWins {
                    leader = Some((play, kind));
                }
            }
        }
    }
    leader.map(|(play, _)| play)
}

/// Resolve a completed trick. `None` when no play is valid.
pub fn resolve_trick(plays: &[TrickPlay]) -> Option<TrickOutcome> {
    let winner = current_leader(plays)?;
    Some(TrickOutcome {
        winner: winner.seat,
        kind: winner.kind(),
        piles: winner.pieces.len() as u8,
    })
}

/// True if `candidate` would take the lead over the current leader.
/// An empty trick is always won.
pub fn would_win(plays: &[TrickPlay], candidate: &[Piece]) -> bool {
    if !classify(candidate).is_valid() {
        return false;
    }
    match current_leader(plays) {
        Some(leader) => compare(candidate, &leader.pieces) == Comparison::AWins,
        None => true,
    }
}
