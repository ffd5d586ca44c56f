//! Declaration planning: how many piles to declare before the first trick.

use tracing::debug;

use crate::domain::context::RoundContext;
use crate::domain::declaration::{forbidden_declaration, PILES_PER_ROUND};
use crate::domain::pieces::Piece;

use super::config::StrategyConfig;
use super::tactics::{greedy_disjoint, holds_both_generals, opener_indices, strong_combos};

/// Piles still unclaimed by earlier declarations.
///
/// Declarations are summed in order only while the running total stays
/// within the round, so an out-of-range prefix cannot push this below 0.
pub fn pile_room(prior: &[u8]) -> u8 {
    let mut total: u8 = 0;
    for &d in prior {
        match total.checked_add(d) {
            Some(next) if next <= PILES_PER_ROUND => total = next,
            _ => break,
        }
    }
    PILES_PER_ROUND - total
}

/// Declaration before any rule adjustment, clamped to the room left.
///
/// Non-starters without an opener cannot count on getting their combos
/// played and plan for zero.
pub fn preferred_declaration(
    hand: &[Piece],
    is_starter: bool,
    room: u8,
    cfg: &StrategyConfig,
) -> u8 {
    let openers = opener_indices(hand, cfg);
    if !is_starter && openers.is_empty() {
        return 0;
    }

    let ranked = strong_combos(hand, cfg);
    let (chosen, used) = greedy_disjoint(&ranked, hand.len(), room as usize);
    let combo_piles: usize = chosen.iter().map(|c| c.size()).sum();
    let free_openers = openers.iter().filter(|&&i| !used[i]).count();
    let bonus = if holds_both_generals(hand) {
        cfg.double_general_bonus as usize
    } else {
        0
    };

    let raw = combo_piles + free_openers + bonus;
    debug!(combo_piles, free_openers, bonus, room, "declaration estimate");
    raw.min(room as usize).min(PILES_PER_ROUND as usize) as u8
}

/// Apply the forced-nonzero and last-declarer rules to a preferred value.
///
/// The rules take precedence over the room clamp: they can push the result
/// to 1 even when no room is left.
pub fn apply_declaration_rules(preferred: u8, prior: &[u8], forced_nonzero: bool) -> u8 {
    let floor = u8::from(forced_nonzero);
    let mut value = preferred.max(floor).min(PILES_PER_ROUND);

    if forbidden_declaration(prior) == Some(value) {
        value = if value > floor { value - 1 } else { value + 1 };
        debug!(value, "adjusted to keep the round total off 8");
    }
    value
}

/// Choose a declaration for `hand`.
pub fn declare(
    hand: &[Piece],
    ctx: &RoundContext,
    forced_nonzero: bool,
    cfg: &StrategyConfig,
) -> u8 {
    let room = pile_room(&ctx.prior_declarations);
    let preferred = preferred_declaration(hand, ctx.is_starter, room, cfg);
    let value = apply_declaration_rules(preferred, &ctx.prior_declarations, forced_nonzero);
    debug!(
        position = ctx.position,
        is_starter = ctx.is_starter,
        forced_nonzero,
        preferred,
        value,
        "declaration chosen"
    );
    value
}
