//! AI configuration handling.
//!
//! `AiConfig` is the JSON-facing form: every known field is optional and
//! anything unrecognized is kept in `custom`. `StrategyConfig` is the
//! resolved set of tunables the planners actually read.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::pieces::Piece;

/// Standard configuration for bots.
///
/// # Example JSON Config
///
/// ```json
/// {
///   "seed": 12345,
///   "opener_threshold": 11,
///   "strong_pair_reference": 12,
///   "double_general_bonus": 1
/// }
/// ```
///
/// # Usage
///
/// ```rust,ignore
/// let config = AiConfig::from_json(Some(&json));
/// let strategy = config.strategy();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Minimum point value for a piece to count as an opener.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opener_threshold: Option<u8>,

    /// A PAIR is strong only when its point sum exceeds this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_pair_reference: Option<u32>,

    /// Extra piles declared when both GENERALs are in hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_general_bonus: Option<u8>,

    /// Lone-opener lead probability with an empty hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lone_opener_lead_min: Option<f64>,

    /// Lone-opener lead probability with a full hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lone_opener_lead_max: Option<f64>,

    /// Bot-specific fields not covered above.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from an optional JSON value.
    ///
    /// Falls back to an empty config when the input is missing or malformed.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Resolve the tunables, filling gaps with defaults.
    pub fn strategy(&self) -> StrategyConfig {
        let defaults = StrategyConfig::default();
        StrategyConfig {
            opener_threshold: self.opener_threshold.unwrap_or(defaults.opener_threshold),
            strong_pair_reference: self
                .strong_pair_reference
                .unwrap_or(defaults.strong_pair_reference),
            double_general_bonus: self
                .double_general_bonus
                .unwrap_or(defaults.double_general_bonus),
            lone_opener_lead_min: self
                .lone_opener_lead_min
                .unwrap_or(defaults.lone_opener_lead_min),
            lone_opener_lead_max: self
                .lone_opener_lead_max
                .unwrap_or(defaults.lone_opener_lead_max),
        }
    }

    /// Create an empty configuration (no seed, no overrides).
    pub fn empty() -> Self {
        Self {
            seed: None,
            opener_threshold: None,
            strong_pair_reference: None,
            double_general_bonus: None,
            lone_opener_lead_min: None,
            lone_opener_lead_max: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

/// Tunables read by the hand evaluator, declaration planner and turn
/// strategist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfig {
    pub opener_threshold: u8,
    pub strong_pair_reference: u32,
    pub double_general_bonus: u8,
    pub lone_opener_lead_min: f64,
    pub lone_opener_lead_max: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            opener_threshold: Piece::ADVISOR_BLACK.point(),
            strong_pair_reference: 12,
            double_general_bonus: 1,
            lone_opener_lead_min: 0.35,
            lone_opener_lead_max: 0.50,
        }
    }
}

impl StrategyConfig {
    pub fn is_opener(&self, piece: Piece) -> bool {
        piece.point() >= self.opener_threshold
    }

    /// Probability of leading a lone opener instead of a combo, scaled
    /// linearly by how full the hand still is.
    pub fn lone_opener_lead_chance(&self, pieces_left: usize, full_hand: usize) -> f64 {
        let fill = if full_hand == 0 {
            0.0
        } else {
            (pieces_left.min(full_hand) as f64) / (full_hand as f64)
        };
        let span = self.lone_opener_lead_max - self.lone_opener_lead_min;
        (self.lone_opener_lead_min + span * fill).clamp(0.0, 1.0)
    }
}
