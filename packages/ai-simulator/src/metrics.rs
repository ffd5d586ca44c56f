//! Metrics collection and output for simulation results.

use std::collections::BTreeMap;

use engine::domain::declaration::PLAYERS;
use serde::Serialize;

use crate::simulator::{GameResult, RoundRecord, TrickRecord};
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub duration_ms: f64,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; PLAYERS],
    pub total_games: u32,
    pub rounds_per_game: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub starter: u8,
    pub declarations: [u8; PLAYERS],
    pub forced_nonzero: [bool; PLAYERS],
    pub captured: [u8; PLAYERS],
    /// Tricks in which no play was valid.
    pub dead_tricks: u32,
    pub declaration_accuracy: Vec<DeclarationAccuracy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tricks: Option<Vec<TrickRecord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclarationAccuracy {
    pub seat: u8,
    pub declared: u8,
    pub captured: u8,
    pub exact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over: Option<u8>, // Piles captured beyond the declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub under: Option<u8>, // Piles short of the declaration
}

impl DeclarationAccuracy {
    fn new(seat: u8, declared: u8, captured: u8) -> Self {
        Self {
            seat,
            declared,
            captured,
            exact: declared == captured,
            over: (captured > declared).then(|| captured - declared),
            under: (captured < declared).then(|| declared - captured),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub accuracy: AccuracyStats,
    pub avg_declared: f64,
    pub avg_captured: f64,
    /// How often each play rule fired for this seat.
    pub reason_counts: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccuracyStats {
    pub exact: u32,
    pub over: u32,  // Rounds with captured > declared
    pub under: u32, // Rounds with captured < declared
    pub exact_pct: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: [String; PLAYERS],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result
        .rounds
        .iter()
        .map(|round| build_round_metrics(round, level))
        .collect();

    let player_metrics: Vec<PlayerMetrics> = (0..PLAYERS)
        .map(|seat| build_player_metrics(seat as u8, &ai_types[seat], &result.rounds))
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
            rounds_per_game: result.rounds.len() as u32,
        },
        duration_ms,
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundRecord, level: &MetricsLevel) -> RoundMetrics {
    let declaration_accuracy = (0..PLAYERS)
        .map(|seat| {
            DeclarationAccuracy::new(seat as u8, round.declarations[seat], round.captured[seat])
        })
        .collect();

    RoundMetrics {
        round_no: round.round_no,
        starter: round.starter,
        declarations: round.declarations,
        forced_nonzero: round.forced_nonzero,
        captured: round.captured,
        dead_tricks: round.tricks.iter().filter(|t| t.winner.is_none()).count() as u32,
        declaration_accuracy,
        tricks: matches!(level, MetricsLevel::Detailed).then(|| round.tricks.clone()),
    }
}

fn build_player_metrics(seat: u8, ai_type: &str, rounds: &[RoundRecord]) -> PlayerMetrics {
    let mut accuracy = AccuracyStats::default();
    let mut reason_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_declared = 0u32;
    let mut total_captured = 0u32;

    for round in rounds {
        let declared = round.declarations[seat as usize];
        let captured = round.captured[seat as usize];
        total_declared += declared as u32;
        total_captured += captured as u32;
        match captured.cmp(&declared) {
            std::cmp::Ordering::Equal => accuracy.exact += 1,
            std::cmp::Ordering::Greater => accuracy.over += 1,
            std::cmp::Ordering::Less => accuracy.under += 1,
        }

        for trick in &round.tricks {
            for (play, reason) in trick.plays.iter().zip(&trick.reasons) {
                if play.seat == seat {
                    *reason_counts.entry(reason.as_str().to_string()).or_default() += 1;
                }
            }
        }
    }

    let n = rounds.len();
    accuracy.exact_pct = if n > 0 {
        (accuracy.exact as f64 / n as f64) * 100.0
    } else {
        0.0
    };
    let avg = |total: u32| if n > 0 { total as f64 / n as f64 } else { 0.0 };

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        accuracy,
        avg_declared: avg(total_declared),
        avg_captured: avg(total_captured),
        reason_counts,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub rounds: u32,
    pub seat0_exact: u32,
    pub seat1_exact: u32,
    pub seat2_exact: u32,
    pub seat3_exact: u32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let exact = |seat: usize| {
            metrics
                .player_metrics
                .get(seat)
                .map(|p| p.accuracy.exact)
                .unwrap_or(0)
        };
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            rounds: metrics.config.rounds_per_game,
            seat0_exact: exact(0),
            seat1_exact: exact(1),
            seat2_exact: exact(2),
            seat3_exact: exact(3),
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
