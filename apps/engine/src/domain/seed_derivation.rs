//! RNG seed derivation for deterministic rounds and bots.
//!
//! Every stream (dealing, per-seat bot RNG) gets its own seed derived from
//! the game seed so that changing one consumer does not shift another.

/// Seed for dealing the hands of `round_no`.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for the bot sitting at `seat`.
pub fn derive_bot_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_mul(31)
        .wrapping_add((seat as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}
