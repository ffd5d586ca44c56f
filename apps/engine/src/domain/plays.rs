//! Play classification and ranking.
//!
//! `classify` maps any group of pieces to exactly one [`PlayType`];
//! `compare` ranks two groups of the same type. Both are pure.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::pieces::{point_sum, Piece, PieceName, StraightGroup};

/// Largest number of pieces a single play may contain.
pub const MAX_PLAY_SIZE: usize = 6;

/// Combination shapes, declared weakest to strongest so that the derived
/// `Ord` is the strength hierarchy. `Invalid` sorts below every real shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayType {
    Invalid,
    Single,
    Pair,
    ThreeOfAKind,
    Straight,
    FourOfAKind,
    ExtendedStraight,
    ExtendedStraight5,
    FiveOfAKind,
    DoubleStraight,
}

impl PlayType {
    pub fn is_valid(self) -> bool {
        self != PlayType::Invalid
    }

    /// THREE_OF_A_KIND or anything above it in the hierarchy.
    pub fn is_strong_shape(self) -> bool {
        self >= PlayType::ThreeOfAKind
    }

    fn is_extended_straight(self) -> bool {
        matches!(
            self,
            PlayType::ExtendedStraight | PlayType::ExtendedStraight5
        )
    }
}

/// Outcome of ranking play `a` against play `b`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Comparison {
    AWins,
    BWins,
    Tie,
    Incomparable,
}

impl Comparison {
    /// The same comparison seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Comparison::AWins => Comparison::BWins,
            Comparison::BWins => Comparison::AWins,
            other => other,
        }
    }
}

/// Per-name counts for a group of pieces, indexed by `PieceName::index`.
fn name_counts(pieces: &[Piece]) -> [usize; 7] {
    let mut counts = [0usize; 7];
    for piece in pieces {
        counts[piece.name.index()] += 1;
    }
    counts
}

/// Straight group shared by every piece, if there is one.
fn common_group(pieces: &[Piece]) -> Option<StraightGroup> {
    let first = pieces.first()?.name.group()?;
    pieces
        .iter()
        .all(|p| p.name.group() == Some(first))
        .then_some(first)
}

/// Classify a group of pieces.
pub fn classify(pieces: &[Piece]) -> PlayType {
    let Some(first) = pieces.first() else {
        return PlayType::Invalid;
    };
    if pieces.len() > MAX_PLAY_SIZE {
        return PlayType::Invalid;
    }
    if pieces.len() == 1 {
        return PlayType::Single;
    }
    if pieces.iter().any(|p| p.color != first.color) {
        return PlayType::Invalid;
    }

    if pieces.len() == 2 {
        return if pieces[1] == *first {
            PlayType::Pair
        } else {
            PlayType::Invalid
        };
    }

    if pieces.iter().all(|p| p.name == PieceName::Soldier) {
        return match pieces.len() {
            3 => PlayType::ThreeOfAKind,
            4 => PlayType::FourOfAKind,
            5 => PlayType::FiveOfAKind,
            _ => PlayType::Invalid,
        };
    }

    let Some(group) = common_group(pieces) else {
        return PlayType::Invalid;
    };
    let mut distribution: Vec<usize> = name_counts(pieces)
        .into_iter()
        .filter(|&c| c > 0)
        .collect();
    distribution.sort_unstable();

    match (pieces.len(), distribution.as_slice()) {
        (3, [1, 1, 1]) => PlayType::Straight,
        (4, [1, 1, 2]) => PlayType::ExtendedStraight,
        (5, [1, 2, 2]) => PlayType::ExtendedStraight5,
        (6, [2, 2, 2]) if group == StraightGroup::Lower => PlayType::DoubleStraight,
        _ => PlayType::Invalid,
    }
}

/// Value two plays of `kind` are ranked by.
///
/// Extended straights count only the highest piece of each distinct name,
/// three names at most. Every other shape counts its full point sum.
pub fn rank_value(kind: PlayType, pieces: &[Piece]) -> u32 {
    if !kind.is_extended_straight() {
        return point_sum(pieces);
    }
    let mut best_per_name = [0u8; 7];
    for piece in pieces {
        let slot = &mut best_per_name[piece.name.index()];
        *slot = (*slot).max(piece.point());
    }
    let mut distinct: Vec<u8> = best_per_name.into_iter().filter(|&p| p > 0).collect();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.iter().take(3).map(|&p| p as u32).sum()
}

/// Rank play `a` against play `b`.
///
/// Plays are only comparable when both classify to the same valid shape.
pub fn compare(a: &[Piece], b: &[Piece]) -> Comparison {
    let kind = classify(a);
    if !kind.is_valid() || classify(b) != kind {
        return Comparison::Incomparable;
    }
    match rank_value(kind, a).cmp(&rank_value(kind, b)) {
        Ordering::Greater => Comparison::AWins,
        Ordering::Less => Comparison::BWins,
        Ordering::Equal => Comparison::Tie,
    }
}

/// True when `challenger` strictly beats `leader`.
pub fn beats(challenger: &[Piece], leader: &[Piece]) -> bool {
    compare(challenger, leader) == Comparison::AWins
}
