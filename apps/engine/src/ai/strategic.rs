//! Strategic: the reference bot built on the declaration planner and the
//! turn strategist.
//!
//! Declaration:
//! - Count strong combos that fit in the piles still unclaimed, plus free
//!   openers, plus a bonus for holding both GENERALs.
//! - Non-starters without an opener declare 0.
//! - Adjust for the forced-nonzero and last-declarer rules.
//!
//! Play:
//! - Disrupt an opponent about to hit their declaration exactly.
//! - Dump the cheapest pieces once the declaration is met.
//! - Otherwise play for urgency, keeping the plan between turns.
//!
//! Determinism: the only random choice is the opener-or-combo lead, drawn
//! from a seeded `ChaCha8Rng`. Same seed and same inputs give the same
//! decisions.

use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::config::{AiConfig, StrategyConfig};
use super::hand_eval::StrategicPlan;
use super::planner::declare;
use super::trait_def::{AiError, AiPlayer};
use super::turn::{self, TurnDecision};
use crate::domain::context::{RoundContext, TurnContext};
use crate::domain::declaration::validate_declaration;
use crate::domain::hand::contains_all;
use crate::domain::pieces::Piece;
use crate::domain::plays::classify;

pub struct Strategic {
    rng: Mutex<ChaCha8Rng>,
    config: StrategyConfig,
}

impl Strategic {
    pub const NAME: &'static str = "Strategic";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    /// Default tunables; system entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(&AiConfig {
            seed,
            ..AiConfig::empty()
        })
    }

    pub fn with_config(config: &AiConfig) -> Self {
        let rng = match config.seed() {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            config: config.strategy(),
        }
    }

    pub fn strategy(&self) -> &StrategyConfig {
        &self.config
    }
}

impl AiPlayer for Strategic {
    fn choose_declaration(
        &self,
        hand: &[Piece],
        ctx: &RoundContext,
        forced_nonzero: bool,
    ) -> Result<u8, AiError> {
        let value = declare(hand, ctx, forced_nonzero, &self.config);
        validate_declaration(value, &ctx.prior_declarations, forced_nonzero)
            .map_err(|e| AiError::InvalidMove(format!("declaration {value}: {e}")))?;
        debug!(
            position = ctx.position,
            value,
            forced_nonzero,
            "declaration chosen"
        );
        Ok(value)
    }

    fn choose_play(
        &self,
        hand: &[Piece],
        ctx: &TurnContext,
        plan: Option<&StrategicPlan>,
    ) -> Result<TurnDecision, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        let decision = turn::choose_play(hand, ctx, plan, &self.config, &mut *rng)?;

        let size_ok = match ctx.required_piece_count {
            Some(k) => decision.pieces.len() == k,
            None => classify(&decision.pieces).is_valid(),
        };
        if !size_ok || !contains_all(hand, &decision.pieces) {
            return Err(AiError::InvalidMove(format!(
                "{:?} does not fit the trick",
                decision.pieces
            )));
        }
        Ok(decision)
    }
}
