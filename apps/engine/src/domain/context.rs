//! Decision contexts handed to the bots by the round orchestrator.
//!
//! `RoundContext` is the declaration-time view, `TurnContext` the per-trick
//! view. Both are plain snapshots: the core reads them and never keeps them.

use serde::{Deserialize, Serialize};

use super::declaration::{PILES_PER_ROUND, PLAYERS};
use super::plays::MAX_PLAY_SIZE;
use super::tricks::{Seat, TrickPlay};
use super::pieces::Piece;
use crate::errors::domain::{DomainError, ValidationKind};

/// Declaration-time context for one player.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundContext {
    /// Declaration order position, 0..=3.
    pub position: u8,
    /// Declarations already made this round, in order.
    pub prior_declarations: Vec<u8>,
    /// Whether this player leads the first trick.
    pub is_starter: bool,
}

impl RoundContext {
    pub fn new(position: u8, prior_declarations: Vec<u8>, is_starter: bool) -> Self {
        Self {
            position,
            prior_declarations,
            is_starter,
        }
    }

    pub fn is_last_declarer(&self) -> bool {
        self.prior_declarations.len() + 1 == PLAYERS
    }
}

/// Captured and declared piles for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerTally {
    pub captured: u8,
    pub declared: u8,
}

impl PlayerTally {
    pub fn new(captured: u8, declared: u8) -> Self {
        Self { captured, declared }
    }

    /// Piles still needed to hit the declaration; negative once over.
    pub fn target_remaining(&self) -> i16 {
        self.declared as i16 - self.captured as i16
    }
}

/// Per-trick context for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub my_seat: Seat,
    /// Pieces each play in this trick must contain; `None` when I start it.
    pub required_piece_count: Option<usize>,
    /// Zero-based trick number within the round.
    pub turn_index: u8,
    pub is_starter: bool,
    /// Plays made so far in this trick, in play order.
    pub trick_plays: Vec<TrickPlay>,
    /// Every seat's captured/declared snapshot, indexed by seat.
    pub tallies: [PlayerTally; PLAYERS],
}

impl TurnContext {
    /// Context for leading a trick.
    pub fn starter(my_seat: Seat) -> Self {
        Self {
            my_seat,
            required_piece_count: None,
            turn_index: 0,
            is_starter: true,
            trick_plays: Vec::new(),
            tallies: [PlayerTally::default(); PLAYERS],
        }
    }

    /// Context for answering a trick of `required` pieces.
    pub fn responder(my_seat: Seat, required: usize) -> Self {
        Self {
            required_piece_count: Some(required),
            is_starter: false,
            ..Self::starter(my_seat)
        }
    }

    pub fn with_turn_index(mut self, turn_index: u8) -> Self {
        self.turn_index = turn_index;
        self
    }

    pub fn with_plays(mut self, plays: Vec<TrickPlay>) -> Self {
        self.trick_plays = plays;
        self
    }

    pub fn with_tallies(mut self, tallies: [PlayerTally; PLAYERS]) -> Self {
        self.tallies = tallies;
        self
    }

    /// Set one seat's tally. Out-of-range seats are ignored here and
    /// rejected by [`TurnContext::validate`].
    pub fn with_tally(mut self, seat: Seat, captured: u8, declared: u8) -> Self {
        if let Some(slot) = self.tallies.get_mut(seat as usize) {
            *slot = PlayerTally::new(captured, declared);
        }
        self
    }

    pub fn my_tally(&self) -> PlayerTally {
        self.tallies
            .get(self.my_seat as usize)
            .copied()
            .unwrap_or_default()
    }

    pub fn captured(&self) -> u8 {
        self.my_tally().captured
    }

    pub fn declared(&self) -> u8 {
        self.my_tally().declared
    }

    pub fn target_remaining(&self) -> i16 {
        self.my_tally().target_remaining()
    }

    /// Reject contexts that cannot come from a well-formed round.
    pub fn validate(&self, hand: &[Piece]) -> Result<(), DomainError> {
        if self.my_seat as usize >= PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Seat {} out of range", self.my_seat),
            ));
        }
        if hand.is_empty() || hand.len() > PILES_PER_ROUND as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidTurnContext,
                format!("Hand of {} pieces cannot play a trick", hand.len()),
            ));
        }
        if self.is_starter != self.required_piece_count.is_none() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTurnContext,
                "Starter flag disagrees with required piece count",
            ));
        }
        if self.is_starter && !self.trick_plays.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTurnContext,
                "Starter cannot see earlier plays in the same trick",
            ));
        }
        if let Some(required) = self.required_piece_count {
            if required == 0 || required > MAX_PLAY_SIZE || required > hand.len() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPieceCount,
                    format!(
                        "Required {required} pieces with {} in hand",
                        hand.len()
                    ),
                ));
            }
        }
        if let Some(bad) = self
            .trick_plays
            .iter()
            .find(|play| play.seat as usize >= PLAYERS)
        {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Trick play from seat {}", bad.seat),
            ));
        }
        Ok(())
    }
}
