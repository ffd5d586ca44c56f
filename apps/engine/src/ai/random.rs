//! Random AI player - makes random legal moves.
//!
//! Baseline for the simulator and a template for new bots: interior
//! mutability through `Mutex`, optional seeding, and errors instead of
//! panics.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::config::StrategyConfig;
use super::hand_eval::{evaluate, StrategicPlan};
use super::trait_def::{AiError, AiPlayer};
use super::turn::{PlayReason, TurnDecision};
use crate::domain::combos::find_of_size;
use crate::domain::context::{RoundContext, TurnContext};
use crate::domain::declaration::legal_declarations;
use crate::domain::pieces::Piece;

/// AI that makes random legal moves.
///
/// Declarations are drawn uniformly from the legal values. Plays are drawn
/// from the valid combos of the required size, falling back to any pieces
/// of that size when the hand has none. Leads are always a single piece.
pub struct RandomPlayer {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_declaration(
        &self,
        _hand: &[Piece],
        ctx: &RoundContext,
        forced_nonzero: bool,
    ) -> Result<u8, AiError> {
        let legal = legal_declarations(&ctx.prior_declarations, forced_nonzero);
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal declarations available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random declaration".into()))
    }

    fn choose_play(
        &self,
        hand: &[Piece],
        ctx: &TurnContext,
        plan: Option<&StrategicPlan>,
    ) -> Result<TurnDecision, AiError> {
        ctx.validate(hand)?;
        let size = ctx.required_piece_count.unwrap_or(1);

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let combos = find_of_size(hand, size);
        let pieces = match combos.choose(&mut *rng) {
            Some(combo) => combo.pieces.clone(),
            None => {
                let mut indices: Vec<usize> = (0..hand.len()).collect();
                indices.shuffle(&mut *rng);
                indices.truncate(size);
                indices.sort_unstable();
                indices.into_iter().map(|i| hand[i]).collect()
            }
        };

        Ok(TurnDecision {
            pieces,
            plan: evaluate(
                hand,
                ctx.target_remaining(),
                plan,
                &StrategyConfig::default(),
            ),
            reason: PlayReason::Random,
            urgency: None,
        })
    }
}
