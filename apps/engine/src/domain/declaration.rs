//! Declaration legality: range, the last-declarer sum rule and the
//! consecutive-zero rule.

use crate::errors::domain::{DomainError, ValidationKind};

/// Piles available in a round (one per piece in a full hand).
pub const PILES_PER_ROUND: u8 = 8;

/// Players per round.
pub const PLAYERS: usize = 4;

/// Zero declarations in a row after which the next one must be nonzero.
pub const MAX_CONSECUTIVE_ZEROS: usize = 2;

/// The value the last declarer may not choose, if any.
///
/// Only applies once three declarations are in; the forbidden value is the
/// one that would make the round total exactly `PILES_PER_ROUND`.
pub fn forbidden_declaration(prior: &[u8]) -> Option<u8> {
    if prior.len() + 1 != PLAYERS {
        return None;
    }
    let total: u32 = prior.iter().map(|&d| d as u32).sum();
    (total <= PILES_PER_ROUND as u32).then(|| PILES_PER_ROUND - total as u8)
}

/// Legal declarations for the next declarer, ascending.
pub fn legal_declarations(prior: &[u8], forced_nonzero: bool) -> Vec<u8> {
    let forbidden = forbidden_declaration(prior);
    let floor = u8::from(forced_nonzero);
    (floor..=PILES_PER_ROUND)
        .filter(|&d| Some(d) != forbidden)
        .collect()
}

/// Check a declaration against every rule for the next declarer.
pub fn validate_declaration(
    value: u8,
    prior: &[u8],
    forced_nonzero: bool,
) -> Result<(), DomainError> {
    if prior.len() >= PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeclaration,
            format!("All {PLAYERS} players have already declared"),
        ));
    }
    if value > PILES_PER_ROUND {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeclaration,
            format!("Declaration {value} exceeds {PILES_PER_ROUND}"),
        ));
    }
    if forced_nonzero && value == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeclaration,
            format!("Must declare at least 1 after {MAX_CONSECUTIVE_ZEROS} consecutive zeros"),
        ));
    }
    if forbidden_declaration(prior) == Some(value) {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeclaration,
            format!("Declarations may not total {PILES_PER_ROUND}"),
        ));
    }
    Ok(())
}

/// Whether a player must declare at least 1 this round, given their own
/// declarations from earlier rounds (oldest first).
pub fn must_declare_nonzero(history: &[u8]) -> bool {
    history.len() >= MAX_CONSECUTIVE_ZEROS
        && history
            .iter()
            .rev()
            .take(MAX_CONSECUTIVE_ZEROS)
            .all(|&d| d == 0)
}
