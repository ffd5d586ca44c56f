//! In-memory round simulator for bot tuning and evaluation.
//!
//! Runs rounds entirely in memory: deal, declarations in seat order from the
//! starter, then tricks until the hands are empty. The simulator owns every
//! piece of round state and hands each bot only its own hand, the public
//! tallies and its own plan from the previous turn.

use engine::ai::{AiError, AiPlayer, PlayReason, StrategicPlan};
use engine::domain::context::{PlayerTally, RoundContext, TurnContext};
use engine::domain::dealing::holder_of;
use engine::domain::declaration::{must_declare_nonzero, validate_declaration, PLAYERS};
use engine::domain::hand::remove_played;
use engine::domain::tricks::{resolve_trick, TrickPlay};
use engine::domain::{deal_hands, derive_dealing_seed, Piece};
use engine::DomainError;
use serde::Serialize;
use tracing::{debug, info};

/// One trick as it was played.
#[derive(Debug, Clone, Serialize)]
pub struct TrickRecord {
    pub trick_no: u8,
    /// Plays in play order, starter first.
    pub plays: Vec<TrickPlay>,
    /// Rule behind each play, in play order.
    pub reasons: Vec<PlayReason>,
    pub winner: Option<u8>,
    pub piles: u8,
}

/// One complete round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round_no: u32,
    pub starter: u8,
    pub declarations: [u8; PLAYERS],
    pub forced_nonzero: [bool; PLAYERS],
    pub captured: [u8; PLAYERS],
    pub tricks: Vec<TrickRecord>,
}

/// Result of simulating a game of several rounds.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub rounds: Vec<RoundRecord>,
}

/// In-memory game simulator.
///
/// Tracks what carries over between rounds: each seat's declaration
/// history (for the consecutive-zero rule) and who starts next.
pub struct Simulator {
    /// Game seed (for deterministic dealing)
    game_seed: u64,
    /// Game ID (for log context)
    game_id: u32,
    declaration_history: [Vec<u8>; PLAYERS],
    next_starter: Option<usize>,
}

impl Simulator {
    pub fn new(game_seed: u64, game_id: u32) -> Self {
        Self {
            game_seed,
            game_id,
            declaration_history: Default::default(),
            next_starter: None,
        }
    }

    /// Simulate `rounds` rounds with the given bots.
    pub fn simulate_game(
        mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        rounds: u32,
    ) -> Result<GameResult, SimulatorError> {
        let mut records = Vec::with_capacity(rounds as usize);
        for round_no in 1..=rounds {
            let record = self.play_round(ais, round_no)?;
            info!(
                game_id = self.game_id,
                round_no,
                declarations = ?record.declarations,
                captured = ?record.captured,
                "round complete"
            );
            records.push(record);
        }
        Ok(GameResult { rounds: records })
    }

    fn play_round(
        &mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        round_no: u32,
    ) -> Result<RoundRecord, SimulatorError> {
        let mut hands = deal_hands(derive_dealing_seed(self.game_seed, round_no));

        // The GENERAL_RED holder opens the first round; afterwards the
        // previous round's last trick winner does.
        let starter = match self.next_starter {
            Some(seat) => seat,
            None => holder_of(&hands, Piece::GENERAL_RED)
                .ok_or_else(|| SimulatorError::InvalidState("GENERAL_RED not dealt".into()))?,
        };

        let forced_nonzero: [bool; PLAYERS] =
            std::array::from_fn(|seat| must_declare_nonzero(&self.declaration_history[seat]));
        let declarations = self.declaration_phase(ais, &hands, starter, forced_nonzero)?;
        for (history, &value) in self.declaration_history.iter_mut().zip(&declarations) {
            history.push(value);
        }

        let mut captured = [0u8; PLAYERS];
        let mut plans: [Option<StrategicPlan>; PLAYERS] = Default::default();
        let mut tricks = Vec::new();
        let mut leader = starter;

        while !hands[leader].is_empty() {
            let trick_no = tricks.len() as u8;
            let tallies: [PlayerTally; PLAYERS] =
                std::array::from_fn(|seat| PlayerTally::new(captured[seat], declarations[seat]));

            let mut plays: Vec<TrickPlay> = Vec::with_capacity(PLAYERS);
            let mut reasons = Vec::with_capacity(PLAYERS);
            let mut required: Option<usize> = None;

            for offset in 0..PLAYERS {
                let seat = (leader + offset) % PLAYERS;
                let ctx = match required {
                    None => TurnContext::starter(seat as u8),
                    Some(k) => TurnContext::responder(seat as u8, k).with_plays(plays.clone()),
                }
                .with_turn_index(trick_no)
                .with_tallies(tallies);

                let decision = ais[seat]
                    .choose_play(&hands[seat], &ctx, plans[seat].as_ref())
                    .map_err(|e| SimulatorError::AiError(seat as u8, "play", e))?;
                if let Some(k) = required {
                    if decision.pieces.len() != k {
                        return Err(SimulatorError::InvalidState(format!(
                            "seat {seat} played {} pieces into a trick of {k}",
                            decision.pieces.len()
                        )));
                    }
                }
                remove_played(&mut hands[seat], &decision.pieces)?;

                required.get_or_insert(decision.pieces.len());
                reasons.push(decision.reason);
                plans[seat] = Some(decision.plan);
                plays.push(TrickPlay::new(seat as u8, decision.pieces));
            }

            let outcome = resolve_trick(&plays);
            let (winner, piles) = match outcome {
                Some(out) => {
                    captured[out.winner as usize] += out.piles;
                    leader = out.winner as usize;
                    (Some(out.winner), out.piles)
                }
                // Nobody captures; the same seat leads again.
                None => (None, 0),
            };
            debug!(
                game_id = self.game_id,
                round_no,
                trick_no,
                winner = ?winner,
                piles,
                "trick resolved"
            );
            tricks.push(TrickRecord {
                trick_no,
                plays,
                reasons,
                winner,
                piles,
            });
        }

        self.next_starter = Some(leader);
        Ok(RoundRecord {
            round_no,
            starter: starter as u8,
            declarations,
            forced_nonzero,
            captured,
            tricks,
        })
    }

    fn declaration_phase(
        &self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        hands: &[Vec<Piece>; PLAYERS],
        starter: usize,
        forced_nonzero: [bool; PLAYERS],
    ) -> Result<[u8; PLAYERS], SimulatorError> {
        let mut declarations = [0u8; PLAYERS];
        let mut prior = Vec::with_capacity(PLAYERS);
        for position in 0..PLAYERS {
            let seat = (starter + position) % PLAYERS;
            let ctx = RoundContext::new(position as u8, prior.clone(), position == 0);
            let value = ais[seat]
                .choose_declaration(&hands[seat], &ctx, forced_nonzero[seat])
                .map_err(|e| SimulatorError::AiError(seat as u8, "declaration", e))?;
            validate_declaration(value, &prior, forced_nonzero[seat])?;
            declarations[seat] = value;
            prior.push(value);
        }
        Ok(declarations)
    }
}

/// Errors that can stop a simulated game.
#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    AiError(u8, &'static str, AiError),
    /// Domain logic error
    DomainError(DomainError),
    /// Invalid game state
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::AiError(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::DomainError(err) => write!(f, "Domain error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::DomainError(err)
    }
}
