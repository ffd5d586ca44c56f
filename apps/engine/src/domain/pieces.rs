//! Core piece types: Piece, PieceName, Color, StraightGroup

use std::cmp::Ordering;

/// Piece names in ascending value order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PieceName {
    Soldier,
    Cannon,
    Horse,
    Chariot,
    Elephant,
    Advisor,
    General,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Black,
    Red,
}

/// The two name groups that straights are built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StraightGroup {
    /// GENERAL, ADVISOR, ELEPHANT
    Upper,
    /// CHARIOT, HORSE, CANNON
    Lower,
}

impl PieceName {
    pub const ALL: [PieceName; 7] = [
        PieceName::Soldier,
        PieceName::Cannon,
        PieceName::Horse,
        PieceName::Chariot,
        PieceName::Elephant,
        PieceName::Advisor,
        PieceName::General,
    ];

    /// Copies of this name per color in a full deck.
    pub const fn copies_per_color(self) -> usize {
        match self {
            PieceName::General => 1,
            PieceName::Soldier => 5,
            _ => 2,
        }
    }

    /// Straight group this name belongs to; soldiers belong to none.
    pub const fn group(self) -> Option<StraightGroup> {
        match self {
            PieceName::General | PieceName::Advisor | PieceName::Elephant => {
                Some(StraightGroup::Upper)
            }
            PieceName::Chariot | PieceName::Horse | PieceName::Cannon => {
                Some(StraightGroup::Lower)
            }
            PieceName::Soldier => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];
}

/// A single tile. Two pieces with the same name and color are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub name: PieceName,
    pub color: Color,
}

impl Piece {
    pub const GENERAL_RED: Piece = Piece::new(PieceName::General, Color::Red);
    pub const GENERAL_BLACK: Piece = Piece::new(PieceName::General, Color::Black);
    pub const ADVISOR_RED: Piece = Piece::new(PieceName::Advisor, Color::Red);
    pub const ADVISOR_BLACK: Piece = Piece::new(PieceName::Advisor, Color::Black);
    pub const ELEPHANT_RED: Piece = Piece::new(PieceName::Elephant, Color::Red);
    pub const ELEPHANT_BLACK: Piece = Piece::new(PieceName::Elephant, Color::Black);
    pub const CHARIOT_RED: Piece = Piece::new(PieceName::Chariot, Color::Red);
    pub const CHARIOT_BLACK: Piece = Piece::new(PieceName::Chariot, Color::Black);
    pub const HORSE_RED: Piece = Piece::new(PieceName::Horse, Color::Red);
    pub const HORSE_BLACK: Piece = Piece::new(PieceName::Horse, Color::Black);
    pub const CANNON_RED: Piece = Piece::new(PieceName::Cannon, Color::Red);
    pub const CANNON_BLACK: Piece = Piece::new(PieceName::Cannon, Color::Black);
    pub const SOLDIER_RED: Piece = Piece::new(PieceName::Soldier, Color::Red);
    pub const SOLDIER_BLACK: Piece = Piece::new(PieceName::Soldier, Color::Black);

    pub const fn new(name: PieceName, color: Color) -> Self {
        Self { name, color }
    }

    /// Point value: SOLDIER_BLACK = 1 up to GENERAL_RED = 14. Red outranks
    /// black of the same name, and every (name, color) has a distinct value.
    pub const fn point(self) -> u8 {
        let base = 2 * self.name as u8 + 1;
        match self.color {
            Color::Red => base + 1,
            Color::Black => base,
        }
    }
}

// Ordering follows point value, which is unique per (name, color), so it
// agrees with Eq.
impl Ord for Piece {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point().cmp(&other.point())
    }
}

impl PartialOrd for Piece {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total points of a group of pieces.
pub fn point_sum(pieces: &[Piece]) -> u32 {
    pieces.iter().map(|p| p.point() as u32).sum()
}
