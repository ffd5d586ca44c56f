//! Turn strategy: which pieces to commit to the current trick.
//!
//! Rules are tried in a fixed order and the first one that applies decides:
//!
//! 1. Disruption: an opponent about to hit their declaration exactly with
//!    this trick is leading it, and I can beat them.
//! 2. Overcapture avoidance: I already have my piles, so throw the cheapest
//!    pieces.
//! 3. Urgency from the piles I still need versus pieces left in hand.
//! 4. Starter or responder play for that urgency.
//!
//! Having no valid combo of the needed size is not an error: the weakest raw
//! pieces are played and the trick is forfeited.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::combos::{find_of_size, Combo};
use crate::domain::context::TurnContext;
use crate::domain::dealing::HAND_SIZE;
use crate::domain::hand::{contains_all, weakest_pieces};
use crate::domain::pieces::Piece;
use crate::domain::plays::{beats, classify, PlayType};
use crate::domain::tricks::{current_leader, would_win, Seat, TrickPlay};
use crate::errors::domain::DomainError;

use super::config::StrategyConfig;
use super::hand_eval::{evaluate, StrategicPlan};
use super::tactics::{
    strong_combos, strongest, strongest_index, weakest_by_points, weakest_by_rank,
};

/// How pressing it is to win piles, from piles needed per piece in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

/// Which rule produced a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayReason {
    Disruption,
    OvercaptureAvoidance,
    CriticalCombo,
    StrongestLead,
    BurdenDump,
    OpenerLead,
    ComboLead,
    WeakestLead,
    WeakestWinner,
    StrongestAvailable,
    WeakestValid,
    Discard,
    Forfeit,
    /// Picked at random by a baseline bot.
    Random,
}

impl PlayReason {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayReason::Disruption => "disruption",
            PlayReason::OvercaptureAvoidance => "overcapture_avoidance",
            PlayReason::CriticalCombo => "critical_combo",
            PlayReason::StrongestLead => "strongest_lead",
            PlayReason::BurdenDump => "burden_dump",
            PlayReason::OpenerLead => "opener_lead",
            PlayReason::ComboLead => "combo_lead",
            PlayReason::WeakestLead => "weakest_lead",
            PlayReason::WeakestWinner => "weakest_winner",
            PlayReason::StrongestAvailable => "strongest_available",
            PlayReason::WeakestValid => "weakest_valid",
            PlayReason::Discard => "discard",
            PlayReason::Forfeit => "forfeit",
            PlayReason::Random => "random",
        }
    }
}

/// Outcome of one strategist call.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnDecision {
    /// Pieces to play, drawn from the hand.
    pub pieces: Vec<Piece>,
    /// Plan to hand back on the next call this round.
    pub plan: StrategicPlan,
    pub reason: PlayReason,
    /// `None` when the play was decided before urgency mattered.
    pub urgency: Option<Urgency>,
}

/// Urgency for needing `target_remaining` piles with `pieces_left` in hand.
///
/// Every trick costs at least one piece, so the hand size bounds the tricks
/// left to play.
pub fn urgency(target_remaining: i16, pieces_left: usize) -> Urgency {
    let need = target_remaining.max(0) as usize;
    if need >= pieces_left {
        Urgency::Critical
    } else if 4 * need >= 3 * pieces_left {
        Urgency::High
    } else if 2 * need >= pieces_left {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Opponents who hit their declaration exactly by winning a trick of
/// `trick_size`, highest declaration first.
pub fn disruption_targets(ctx: &TurnContext, trick_size: usize) -> Vec<Seat> {
    let mut targets: Vec<(Seat, u8)> = ctx
        .tallies
        .iter()
        .enumerate()
        .filter(|&(seat, _)| seat != ctx.my_seat as usize)
        .filter(|(_, t)| {
            t.captured < t.declared && t.captured as usize + trick_size == t.declared as usize
        })
        .map(|(seat, t)| (seat as Seat, t.declared))
        .collect();
    targets.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    targets.into_iter().map(|(seat, _)| seat).collect()
}

/// Weakest play of `trick_size` that beats the current leader, when that
/// leader is a disruption target.
fn disruption_play(
    hand: &[Piece],
    ctx: &TurnContext,
    trick_size: usize,
) -> Option<(Seat, Vec<Piece>)> {
    let leader = current_leader(&ctx.trick_plays)?;
    let targets = disruption_targets(ctx, trick_size);
    let target = targets.into_iter().find(|&seat| seat == leader.seat)?;
    let candidates = find_of_size(hand, trick_size);
    let winner = weakest_by_rank(
        candidates
            .iter()
            .filter(|c| beats(&c.pieces, &leader.pieces)),
    )?;
    Some((target, winner.pieces.clone()))
}

/// Cheapest play once the declaration is met: the lowest-point pieces of
/// the required size, or the weakest single when leading.
fn overcapture_play(hand: &[Piece], required: Option<usize>) -> Vec<Piece> {
    weakest_pieces(hand, required.unwrap_or(1))
}

/// Choose the pieces to play this trick.
///
/// `plan` is the plan returned by the previous call this round, if any.
/// The returned decision carries the updated plan to pass next time.
pub fn choose_play<R: Rng + ?Sized>(
    hand: &[Piece],
    ctx: &TurnContext,
    plan: Option<&StrategicPlan>,
    cfg: &StrategyConfig,
    rng: &mut R,
) -> Result<TurnDecision, DomainError> {
    ctx.validate(hand)?;
    let target = ctx.target_remaining();
    let plan = evaluate(hand, target, plan, cfg);

    let (pieces, reason, level) = if let Some((seat, pieces)) = ctx
        .required_piece_count
        .and_then(|k| disruption_play(hand, ctx, k))
    {
        debug!(my_seat = ctx.my_seat, target_seat = seat, "disrupting");
        (pieces, PlayReason::Disruption, None)
    } else if target <= 0 {
        (
            overcapture_play(hand, ctx.required_piece_count),
            PlayReason::OvercaptureAvoidance,
            None,
        )
    } else {
        let level = urgency(target, hand.len());
        if target as usize > hand.len() {
            debug!(
                target_remaining = target,
                hand_len = hand.len(),
                "target unreachable, best effort"
            );
        }
        let (pieces, reason) = match ctx.required_piece_count {
            None => starter_play(hand, &plan, target, level, cfg, rng),
            Some(k) => responder_play(hand, &ctx.trick_plays, k, level),
        };
        (pieces, reason, Some(level))
    };

    if !contains_all(hand, &pieces) {
        return Err(DomainError::internal(format!(
            "chosen pieces {pieces:?} are not all in hand"
        )));
    }
    debug!(
        my_seat = ctx.my_seat,
        turn = ctx.turn_index,
        target_remaining = target,
        reason = reason.as_str(),
        kind = ?classify(&pieces),
        size = pieces.len(),
        "play chosen"
    );
    Ok(TurnDecision {
        pieces,
        plan,
        reason,
        urgency: level,
    })
}

/// Lead a trick and set its size.
fn starter_play<R: Rng + ?Sized>(
    hand: &[Piece],
    plan: &StrategicPlan,
    target: i16,
    level: Urgency,
    cfg: &StrategyConfig,
    rng: &mut R,
) -> (Vec<Piece>, PlayReason) {
    let target = target.max(0) as usize;
    let fitting_strong: Vec<Combo> = strong_combos(hand, cfg)
        .into_iter()
        .filter(|c| c.size() <= target)
        .collect();

    if level == Urgency::Critical {
        // Sorted largest first, so the head is the largest strong combo.
        if let Some(combo) = fitting_strong.first() {
            return (combo.pieces.clone(), PlayReason::CriticalCombo);
        }
        let all: Vec<usize> = (0..hand.len()).collect();
        if let Some(i) = strongest_index(hand, &all) {
            return (vec![hand[i]], PlayReason::StrongestLead);
        }
    }

    if level == Urgency::Low {
        if let Some(dump) = burden_lead(hand, plan) {
            return (dump, PlayReason::BurdenDump);
        }
    }

    if matches!(level, Urgency::Medium | Urgency::High) && target > 1 {
        let openers: Vec<usize> = (0..hand.len())
            .filter(|&i| plan.openers.contains(&hand[i]))
            .collect();
        if let Some(i) = strongest_index(hand, &openers) {
            match fitting_strong.first() {
                Some(combo) => {
                    let chance = cfg.lone_opener_lead_chance(hand.len(), HAND_SIZE);
                    if rng.random_bool(chance) {
                        return (vec![hand[i]], PlayReason::OpenerLead);
                    }
                    return (combo.pieces.clone(), PlayReason::ComboLead);
                }
                None => return (vec![hand[i]], PlayReason::OpenerLead),
            }
        }
    }

    let singles = find_of_size(hand, 1);
    match weakest_by_points(&singles) {
        Some(single) => (single.pieces.clone(), PlayReason::WeakestLead),
        None => (weakest_pieces(hand, 1), PlayReason::Forfeit),
    }
}

/// One or two of the weakest burden pieces: two when they form a valid
/// pair, otherwise the single weakest.
fn burden_lead(hand: &[Piece], plan: &StrategicPlan) -> Option<Vec<Piece>> {
    let mut burden: Vec<Piece> = plan
        .burden
        .iter()
        .copied()
        .filter(|p| hand.contains(p))
        .collect();
    burden.sort();
    if burden.len() >= 2 && classify(&burden[..2]) == PlayType::Pair {
        return Some(burden[..2].to_vec());
    }
    burden.first().map(|&p| vec![p])
}

/// Answer a trick whose size is fixed at `required`.
fn responder_play(
    hand: &[Piece],
    plays: &[TrickPlay],
    required: usize,
    level: Urgency,
) -> (Vec<Piece>, PlayReason) {
    let candidates = find_of_size(hand, required);
    if candidates.is_empty() {
        return (weakest_pieces(hand, required), PlayReason::Forfeit);
    }
    let winners: Vec<&Combo> = candidates
        .iter()
        .filter(|c| would_win(plays, &c.pieces))
        .collect();

    match level {
        Urgency::Critical => {
            if let Some(win) = weakest_by_rank(winners.iter().copied()) {
                return (win.pieces.clone(), PlayReason::WeakestWinner);
            }
            match strongest(&candidates) {
                Some(best) => (best.pieces.clone(), PlayReason::StrongestAvailable),
                None => (weakest_pieces(hand, required), PlayReason::Forfeit),
            }
        }
        Urgency::High | Urgency::Medium => match weakest_by_rank(winners.iter().copied()) {
            Some(win) => (win.pieces.clone(), PlayReason::WeakestWinner),
            None => (weakest_pieces(hand, required), PlayReason::Discard),
        },
        // Whether it wins or not, the weakest valid combo is all low urgency
        // is willing to spend.
        Urgency::Low => match weakest_by_points(&candidates) {
            Some(weakest) => (weakest.pieces.clone(), PlayReason::WeakestValid),
            None => (weakest_pieces(hand, required), PlayReason::Forfeit),
        },
    }
}
