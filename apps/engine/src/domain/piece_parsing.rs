//! Piece parsing from and formatting to tokens such as "GENERAL_RED".

use std::fmt;
use std::str::FromStr;

use super::pieces::{Color, Piece, PieceName};
use crate::errors::domain::{DomainError, ValidationKind};

impl PieceName {
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceName::General => "GENERAL",
            PieceName::Advisor => "ADVISOR",
            PieceName::Elephant => "ELEPHANT",
            PieceName::Chariot => "CHARIOT",
            PieceName::Horse => "HORSE",
            PieceName::Cannon => "CANNON",
            PieceName::Soldier => "SOLDIER",
        }
    }
}

impl Color {
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name.as_str(), self.color.as_str())
    }
}

impl FromStr for PieceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParsePiece, format!("Invalid name: {s}"))
            })
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RED" => Ok(Color::Red),
            "BLACK" => Ok(Color::Black),
            _ => Err(DomainError::validation(
                ValidationKind::ParsePiece,
                format!("Invalid color: {s}"),
            )),
        }
    }
}

impl FromStr for Piece {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, color) = s.trim().rsplit_once('_').ok_or_else(|| {
            DomainError::validation(ValidationKind::ParsePiece, format!("Parse piece: {s}"))
        })?;
        Ok(Piece::new(name.parse()?, color.parse()?))
    }
}

/// Parse piece tokens (e.g. "GENERAL_RED", "SOLDIER_BLACK") without panicking.
pub fn try_parse_pieces<I, S>(tokens: I) -> Result<Vec<Piece>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Piece>())
        .collect()
}
