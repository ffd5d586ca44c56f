//! Domain-level error type shared by the rule engine and the bots.
//!
//! Every variant signals a caller contract violation: the core never
//! reports "no valid combo" or "target unreachable" as errors.

use thiserror::Error;

/// Validation kinds, one per caller contract the domain enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PieceNotInHand,
    InvalidPieceCount,
    InvalidDeclaration,
    InvalidSeat,
    InvalidTurnContext,
    ParsePiece,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input rejected before any decision was made
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Internal inconsistency that should be impossible for well-formed input
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Internal(_) => None,
        }
    }
}
