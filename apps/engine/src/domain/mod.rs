//! Domain layer: pieces, play classification and the round rules.

pub mod combos;
pub mod context;
pub mod dealing;
pub mod declaration;
pub mod hand;
pub mod piece_parsing;
pub mod piece_serde;
pub mod pieces;
pub mod plays;
pub mod seed_derivation;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_props_combos;
#[cfg(test)]
mod tests_props_declaration;
#[cfg(test)]
mod tests_props_plays;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use combos::{find_all, find_of_size, Combo};
pub use context::{PlayerTally, RoundContext, TurnContext};
pub use dealing::{deal_hands, full_deck};
pub use declaration::{PILES_PER_ROUND, PLAYERS};
pub use piece_parsing::try_parse_pieces;
pub use pieces::{point_sum, Color, Piece, PieceName};
pub use plays::{classify, compare, Comparison, PlayType};
pub use seed_derivation::{derive_bot_seed, derive_dealing_seed};
pub use tricks::{resolve_trick, Seat, TrickOutcome, TrickPlay};
