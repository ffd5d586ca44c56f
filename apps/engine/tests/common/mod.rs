#![allow(dead_code)]

// tests/common/mod.rs
use engine::ai::{AiPlayer, StrategicPlan};
use engine::domain::context::{PlayerTally, RoundContext, TurnContext};
use engine::domain::declaration::PLAYERS;
use engine::domain::hand::remove_played;
use engine::domain::tricks::{resolve_trick, TrickOutcome, TrickPlay};
use engine::domain::{try_parse_pieces, Piece};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Parse `NAME_COLOR` tokens; panics on typos.
pub fn p(tokens: &[&str]) -> Vec<Piece> {
    try_parse_pieces(tokens).expect("test pieces should parse")
}

/// Everything observable about one played-out round.
#[derive(Debug, Clone)]
pub struct RoundLog {
    pub declarations: [u8; PLAYERS],
    pub captured: [u8; PLAYERS],
    pub tricks: Vec<(Vec<TrickPlay>, Option<TrickOutcome>)>,
    /// Seat that leads the next round.
    pub next_starter: usize,
}

/// Drive one round: declarations from `starter` in seat order, then tricks
/// until the hands run out. Each seat's plan is threaded between its turns.
pub fn play_round(
    bots: &[Box<dyn AiPlayer>],
    mut hands: [Vec<Piece>; PLAYERS],
    starter: usize,
    forced: [bool; PLAYERS],
) -> RoundLog {
    let mut declarations = [0u8; PLAYERS];
    let mut prior = Vec::new();
    for position in 0..PLAYERS {
        let seat = (starter + position) % PLAYERS;
        let ctx = RoundContext::new(position as u8, prior.clone(), position == 0);
        let value = bots[seat]
            .choose_declaration(&hands[seat], &ctx, forced[seat])
            .expect("declaration should succeed");
        declarations[seat] = value;
        prior.push(value);
    }

    let mut captured = [0u8; PLAYERS];
    let mut plans: [Option<StrategicPlan>; PLAYERS] = Default::default();
    let mut tricks = Vec::new();
    let mut leader = starter;
    let mut turn_index = 0u8;

    while !hands[leader].is_empty() {
        let tallies: [PlayerTally; PLAYERS] =
            std::array::from_fn(|s| PlayerTally::new(captured[s], declarations[s]));
        let mut plays: Vec<TrickPlay> = Vec::new();
        let mut required = None;
        for offset in 0..PLAYERS {
            let seat = (leader + offset) % PLAYERS;
            let ctx = match required {
                None => TurnContext::starter(seat as u8),
                Some(k) => TurnContext::responder(seat as u8, k).with_plays(plays.clone()),
            }
            .with_turn_index(turn_index)
            .with_tallies(tallies);
            let decision = bots[seat]
                .choose_play(&hands[seat], &ctx, plans[seat].as_ref())
                .expect("play should succeed");
            remove_played(&mut hands[seat], &decision.pieces).expect("pieces come from hand");
            required.get_or_insert(decision.pieces.len());
            plans[seat] = Some(decision.plan);
            plays.push(TrickPlay::new(seat as u8, decision.pieces));
        }
        let outcome = resolve_trick(&plays);
        if let Some(out) = &outcome {
            captured[out.winner as usize] += out.piles;
            leader = out.winner as usize;
        }
        tricks.push((plays, outcome));
        turn_index += 1;
    }

    RoundLog {
        declarations,
        captured,
        tricks,
        next_starter: leader,
    }
}
