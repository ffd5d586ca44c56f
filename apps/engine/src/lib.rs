//! Decision core for a four-player pile-capturing tile game.
//!
//! `domain` holds the pieces and the rules (play classification, combo
//! enumeration, trick resolution, declaration legality, dealing). `ai` holds
//! the planners and the bots built on them.

pub mod ai;
pub mod domain;
pub mod errors;

pub use ai::{create_ai, AiConfig, AiError, AiPlayer, StrategicPlan, TurnDecision};
pub use errors::{DomainError, ValidationKind};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
