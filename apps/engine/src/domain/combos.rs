//! Exhaustive enumeration of the valid plays inside a hand.

use super::pieces::{point_sum, Piece};
use super::plays::{classify, rank_value, PlayType, MAX_PLAY_SIZE};

/// A valid play found in a hand.
///
/// `indices` are positions in the hand the combo was found in (ascending),
/// which keeps duplicate pieces distinguishable when checking overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    pub kind: PlayType,
    pub indices: Vec<usize>,
    pub pieces: Vec<Piece>,
    /// Value used to rank this combo against same-type plays.
    pub rank: u32,
}

impl Combo {
    pub fn size(&self) -> usize {
        self.pieces.len()
    }

    /// Total point value, regardless of how the shape is ranked.
    pub fn points(&self) -> u32 {
        point_sum(&self.pieces)
    }

    /// True if none of this combo's hand positions are marked in `used`.
    pub fn is_free(&self, used: &[bool]) -> bool {
        self.indices
            .iter()
            .all(|&i| !used.get(i).copied().unwrap_or(false))
    }

    pub fn mark_used(&self, used: &mut [bool]) {
        for &i in &self.indices {
            if let Some(slot) = used.get_mut(i) {
                *slot = true;
            }
        }
    }

    /// Strong means THREE_OF_A_KIND or above, or a PAIR whose point sum
    /// exceeds `strong_pair_reference`.
    pub fn is_strong(&self, strong_pair_reference: u32) -> bool {
        self.kind.is_strong_shape()
            || (self.kind == PlayType::Pair && self.points() > strong_pair_reference)
    }
}

/// Visit every ascending k-combination of `0..n`.
fn for_each_index_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k == 0 || k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        visit(&idx);
        // Rightmost position that can still advance.
        let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return;
        };
        idx[pos] += 1;
        for j in pos + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Every valid combo of exactly `size` pieces, in lexicographic index order.
pub fn find_of_size(hand: &[Piece], size: usize) -> Vec<Combo> {
    let mut out = Vec::new();
    if size > MAX_PLAY_SIZE {
        return out;
    }
    for_each_index_combination(hand.len(), size, |indices| {
        let pieces: Vec<Piece> = indices.iter().map(|&i| hand[i]).collect();
        let kind = classify(&pieces);
        if kind.is_valid() {
            out.push(Combo {
                kind,
                indices: indices.to_vec(),
                rank: rank_value(kind, &pieces),
                pieces,
            });
        }
    });
    out
}

/// Every valid combo of 1 to 6 pieces, ordered by size then index order.
pub fn find_all(hand: &[Piece]) -> Vec<Combo> {
    (1..=MAX_PLAY_SIZE)
        .flat_map(|size| find_of_size(hand, size))
        .collect()
}
