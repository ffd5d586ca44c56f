//! AI player module - declaration and play decisions.
//!
//! This module provides:
//! - AI trait for different AI implementations
//! - Strategic: plan-driven bot built on the planners below
//! - RandomPlayer: random legal moves (seedable for tests)
//! - Hand evaluation, declaration planning and turn strategy as pure
//!   functions, usable without a bot

pub mod config;
pub mod hand_eval;
pub mod planner;
mod random;
mod strategic;
pub mod tactics;
mod trait_def;
pub mod turn;

#[cfg(test)]
mod tests_props_planning;
#[cfg(test)]
mod tests_props_turn;

pub use config::{AiConfig, StrategyConfig};
pub use hand_eval::{evaluate, PlanStatus, PlannedCombo, StrategicPlan};
pub use planner::{declare, pile_room};
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use strategic::Strategic;
pub use trait_def::{AiError, AiPlayer};
pub use turn::{choose_play, urgency, PlayReason, TurnDecision, Urgency};

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["strategic", "random"];

/// Create an AI player from ai_type string and optional config.
///
/// Currently supports:
/// - "strategic": Strategic with seed and tunables from config
/// - "random": RandomPlayer with optional seed from config
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let config = AiConfig::from_json(config);
    match ai_type {
        "strategic" => Some(Box::new(Strategic::with_config(&config))),
        "random" => Some(Box::new(RandomPlayer::new(config.seed()))),
        _ => None,
    }
}
