//! AI player trait definition.

use std::fmt;

use super::hand_eval::StrategicPlan;
use super::turn::TurnDecision;
use crate::domain::context::{RoundContext, TurnContext};
use crate::domain::pieces::Piece;
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
    /// The caller passed a hand or context that breaks the input contract
    Contract(DomainError),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
            AiError::Contract(err) => write!(f, "AI contract violation: {err}"),
        }
    }
}

impl std::error::Error for AiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AiError::Contract(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for AiError {
    fn from(err: DomainError) -> Self {
        AiError::Contract(err)
    }
}

/// Trait for AI players.
///
/// Implementations are handed a hand plus the public round state and must
/// return a legal action. The caller owns the round state and threads the
/// plan from one `choose_play` call to the next.
pub trait AiPlayer: Send + Sync {
    /// Choose how many piles to declare for the round.
    ///
    /// `forced_nonzero` is set when this player declared zero in each of
    /// the previous two rounds.
    fn choose_declaration(
        &self,
        hand: &[Piece],
        ctx: &RoundContext,
        forced_nonzero: bool,
    ) -> Result<u8, AiError>;

    /// Choose the pieces to play into the current trick.
    fn choose_play(
        &self,
        hand: &[Piece],
        ctx: &TurnContext,
        plan: Option<&StrategicPlan>,
    ) -> Result<TurnDecision, AiError>;
}
