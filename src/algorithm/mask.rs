use bitvec::prelude::*;
use std::fmt;

use crate::spatial::neighbors::Direction;

/// Four-bit set of occupied neighbor directions
///
/// Bit 0 is Up, 1 Down, 2 Left, 3 Right. Set semantics make every
/// consumer independent of the order neighbors were discovered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct NeighborMask {
    bits: BitArr!(for 4, in u8, Lsb0),
}

impl NeighborMask {
    /// Mask with no neighbors present
    pub const EMPTY: Self = Self {
        bits: BitArray::ZERO,
    };

    /// Build a mask from directions; duplicates collapse
    pub fn from_directions<I>(directions: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut mask = Self::EMPTY;
        for direction in directions {
            mask.insert(direction);
        }
        mask
    }

    /// Build a mask from its raw value, ignoring bits above the fourth
    pub fn from_bits(bits: u8) -> Self {
        Self {
            bits: BitArray::new([bits & 0b1111]),
        }
    }

    /// Raw 4-bit value
    pub fn bits(&self) -> u8 {
        self.bits
            .iter_ones()
            .fold(0, |acc, index| acc | (1 << index))
    }

    /// Add a direction
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.bit(), true);
    }

    /// Test direction membership
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.bit()).as_deref() == Some(&true)
    }

    /// Number of directions present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no directions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Present directions in canonical order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.bits.iter_ones().filter_map(Direction::from_bit)
    }

    /// Canonical directions missing from the mask
    pub fn missing(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| !self.contains(direction))
    }

    /// Component-wise sum of the unit vectors of every present direction
    pub fn vector_sum(&self) -> [i32; 2] {
        self.directions().fold([0, 0], |[x, y], direction| {
            let [dx, dy] = direction.vector();
            [x + dx, y + dy]
        })
    }

    /// Rotate every direction a quarter turn counter-clockwise
    #[must_use]
    pub fn rotate_ccw(&self) -> Self {
        Self::from_directions(self.directions().map(Direction::rotate_ccw))
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self
            .directions()
            .map(|direction| format!("{direction:?}"))
            .collect();
        write!(f, "NeighborMask({:#06b}: [{}])", self.bits(), names.join(", "))
    }
}
