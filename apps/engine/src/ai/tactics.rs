//! Small pure helpers shared by the planners: strong-combo selection,
//! opener lookup and weakest/strongest picks.

use crate::domain::combos::{find_all, Combo};
use crate::domain::pieces::Piece;

use super::config::StrategyConfig;

/// Multi-piece combos that count as strong, best first: larger size, then
/// stronger shape, then higher rank.
pub fn strong_combos(hand: &[Piece], cfg: &StrategyConfig) -> Vec<Combo> {
    let mut combos: Vec<Combo> = find_all(hand)
        .into_iter()
        .filter(|c| c.size() >= 2 && c.is_strong(cfg.strong_pair_reference))
        .collect();
    combos.sort_by(|a, b| {
        b.size()
            .cmp(&a.size())
            .then(b.kind.cmp(&a.kind))
            .then(b.rank.cmp(&a.rank))
            .then(a.indices.cmp(&b.indices))
    });
    combos
}

/// Greedily take disjoint combos from `ranked` (in order) while their total
/// size stays within `budget`. Returns the chosen combos and the hand
/// positions they occupy.
pub fn greedy_disjoint(
    ranked: &[Combo],
    hand_len: usize,
    budget: usize,
) -> (Vec<Combo>, Vec<bool>) {
    let mut used = vec![false; hand_len];
    let mut total = 0usize;
    let mut chosen = Vec::new();
    for combo in ranked {
        if combo.is_free(&used) && total + combo.size() <= budget {
            combo.mark_used(&mut used);
            total += combo.size();
            chosen.push(combo.clone());
        }
    }
    (chosen, used)
}

/// Hand positions holding openers.
pub fn opener_indices(hand: &[Piece], cfg: &StrategyConfig) -> Vec<usize> {
    (0..hand.len())
        .filter(|&i| cfg.is_opener(hand[i]))
        .collect()
}

/// Both GENERALs, one of each color, in the same hand.
pub fn holds_both_generals(hand: &[Piece]) -> bool {
    hand.contains(&Piece::GENERAL_RED) && hand.contains(&Piece::GENERAL_BLACK)
}

/// Weakest combo by total points, then rank, then hand position.
pub fn weakest_by_points<'a>(combos: impl IntoIterator<Item = &'a Combo>) -> Option<&'a Combo> {
    combos
        .into_iter()
        .min_by(|a, b| {
            a.points()
                .cmp(&b.points())
                .then(a.rank.cmp(&b.rank))
                .then(a.indices.cmp(&b.indices))
        })
}

/// Weakest combo by rank. Meant for combos of one shape.
pub fn weakest_by_rank<'a>(combos: impl IntoIterator<Item = &'a Combo>) -> Option<&'a Combo> {
    combos
        .into_iter()
        .min_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then(a.points().cmp(&b.points()))
                .then(a.indices.cmp(&b.indices))
        })
}

/// Strongest combo: best shape, then rank. Ties keep the earliest.
pub fn strongest<'a>(combos: impl IntoIterator<Item = &'a Combo>) -> Option<&'a Combo> {
    combos.into_iter().fold(None, |best: Option<&Combo>, c| match best {
        Some(b) if (b.kind, b.rank) >= (c.kind, c.rank) => Some(b),
        _ => Some(c),
    })
}

/// Index of the highest-point piece among `candidates`. Ties keep the earliest.
pub fn strongest_index(hand: &[Piece], candidates: &[usize]) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .fold(None, |best: Option<usize>, i| match best {
            Some(b) if hand[b].point() >= hand[i].point() => Some(b),
            _ => Some(i),
        })
}
