//! Hand evaluation: split a hand into roles relative to the piles still
//! needed this round.
//!
//! The resulting [`StrategicPlan`] is a plain value. The orchestrator keeps
//! it between tricks and passes it back in; nothing here caches it.
//!
//! Roles:
//! - committed: disjoint strong combos whose sizes add up to at most the
//!   remaining target
//! - openers: high pieces outside those combos, used to win single tricks
//!   and keep the lead
//! - reserve: one or two of the weakest leftovers held back as a margin
//! - burden: everything else, to be dumped

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::hand::remove_played;
use crate::domain::pieces::Piece;
use crate::domain::plays::PlayType;

use super::config::StrategyConfig;
use super::tactics::{greedy_disjoint, strong_combos};

/// A combo set aside to win `pieces.len()` piles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCombo {
    pub kind: PlayType,
    pub pieces: Vec<Piece>,
}

/// How the current plan came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    /// First evaluation of the round.
    Initial,
    /// Roles carried over from the previous plan.
    Carried,
    /// The previous plan became impossible and was rebuilt from the hand.
    Rebuilt,
}

/// Role assignment for the pieces in hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicPlan {
    pub target_remaining: i16,
    pub committed: Vec<PlannedCombo>,
    pub openers: Vec<Piece>,
    pub reserve: Vec<Piece>,
    pub burden: Vec<Piece>,
    pub status: PlanStatus,
}

impl StrategicPlan {
    fn all_burden(hand: &[Piece], target_remaining: i16, status: PlanStatus) -> Self {
        Self {
            target_remaining,
            committed: Vec::new(),
            openers: Vec::new(),
            reserve: Vec::new(),
            burden: hand.to_vec(),
            status,
        }
    }

    /// Piles the committed combos are expected to deliver.
    pub fn committed_size(&self) -> usize {
        self.committed.iter().map(|c| c.pieces.len()).sum()
    }

    /// Piles the plan can plausibly deliver: committed combos plus one per
    /// opener.
    pub fn planned_piles(&self) -> usize {
        self.committed_size() + self.openers.len()
    }

    /// Pieces the plan accounts for, in role order.
    pub fn piece_count(&self) -> usize {
        self.committed_size() + self.openers.len() + self.reserve.len() + self.burden.len()
    }

    pub fn is_burden(&self, piece: Piece) -> bool {
        self.burden.contains(&piece)
    }

    /// Carry roles over to the current hand, or `None` if the plan can no
    /// longer work.
    fn carry_over(&self, hand: &[Piece], target_remaining: i16) -> Option<StrategicPlan> {
        let mut remaining = hand.to_vec();

        let mut committed = Vec::new();
        for combo in &self.committed {
            let present = count_present(&remaining, &combo.pieces);
            if present == combo.pieces.len() {
                remove_played(&mut remaining, &combo.pieces).ok()?;
                committed.push(combo.clone());
            } else if present > 0 {
                debug!(kind = ?combo.kind, present, "committed combo broken");
                return None;
            }
        }

        let openers = take_present(&mut remaining, &self.openers);
        let committed_piles: usize = committed.iter().map(|c: &PlannedCombo| c.pieces.len()).sum();
        if !self.openers.is_empty()
            && openers.is_empty()
            && (committed_piles as i16) < target_remaining
        {
            debug!(
                committed_piles,
                target_remaining, "openers exhausted and combos fall short"
            );
            return None;
        }

        let reserve = take_present(&mut remaining, &self.reserve);
        Some(StrategicPlan {
            target_remaining,
            committed,
            openers,
            reserve,
            burden: remaining,
            status: PlanStatus::Carried,
        })
    }
}

/// How many of `wanted` can be matched in `pool`, respecting multiplicity.
fn count_present(pool: &[Piece], wanted: &[Piece]) -> usize {
    let mut scratch = pool.to_vec();
    take_present(&mut scratch, wanted).len()
}

/// Remove and return the pieces of `wanted` still found in `pool`.
fn take_present(pool: &mut Vec<Piece>, wanted: &[Piece]) -> Vec<Piece> {
    let mut taken = Vec::new();
    for piece in wanted {
        if let Some(pos) = pool.iter().position(|p| p == piece) {
            taken.push(pool.remove(pos));
        }
    }
    taken
}

/// Build a plan from scratch.
fn build_plan(
    hand: &[Piece],
    target_remaining: i16,
    cfg: &StrategyConfig,
    status: PlanStatus,
) -> StrategicPlan {
    if target_remaining <= 0 {
        return StrategicPlan::all_burden(hand, target_remaining, status);
    }

    let ranked = strong_combos(hand, cfg);
    let (chosen, mut used) = greedy_disjoint(&ranked, hand.len(), target_remaining as usize);
    let committed = chosen
        .into_iter()
        .map(|c| PlannedCombo {
            kind: c.kind,
            pieces: c.pieces,
        })
        .collect();

    let mut openers = Vec::new();
    for (i, piece) in hand.iter().enumerate() {
        if !used[i] && cfg.is_opener(*piece) {
            used[i] = true;
            openers.push(*piece);
        }
    }
    openers.sort_by(|a, b| b.cmp(a));

    let mut leftovers: Vec<Piece> = (0..hand.len())
        .filter(|&i| !used[i])
        .map(|i| hand[i])
        .collect();
    leftovers.sort();
    let reserve_count = if leftovers.len() >= 3 {
        2
    } else {
        leftovers.len().min(1)
    };
    let burden = leftovers.split_off(reserve_count);

    StrategicPlan {
        target_remaining,
        committed,
        openers,
        reserve: leftovers,
        burden,
        status,
    }
}

/// Evaluate a hand against the piles still needed.
///
/// With a previous plan from this round, roles of pieces still in hand are
/// kept unless that plan has become impossible, in which case a fresh plan
/// is built from the current hand.
pub fn evaluate(
    hand: &[Piece],
    target_remaining: i16,
    previous: Option<&StrategicPlan>,
    cfg: &StrategyConfig,
) -> StrategicPlan {
    let Some(previous) = previous else {
        return build_plan(hand, target_remaining, cfg, PlanStatus::Initial);
    };
    if target_remaining <= 0 {
        return StrategicPlan::all_burden(hand, target_remaining, PlanStatus::Carried);
    }
    match previous.carry_over(hand, target_remaining) {
        Some(plan) => plan,
        None => {
            debug!(
                target_remaining,
                hand_len = hand.len(),
                "plan impossible, rebuilding"
            );
            build_plan(hand, target_remaining, cfg, PlanStatus::Rebuilt)
        }
    }
}
