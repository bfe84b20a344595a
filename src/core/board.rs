//! Board representation.
//!
//! The board is a flat sequence of slots. With `P` pits per side:
//!
//! ```text
//! index:   0 .. P-1     P        P+1 .. 2P     2P+1
//! owner:   side One     store 1  side Two      store 2
//! ```
//!
//! For the standard game that is pits 0-5, store 6, pits 7-12, store 13.
//!
//! ## Perspective
//!
//! Sowing is written once, from the mover's point of view. `to_perspective`
//! rotates the slots so the mover's pits are always `0..P` and their store is
//! `P`; `to_absolute` undoes it. Side One is the identity; side Two is a
//! rotation by `P + 1` (swapping the two halves).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, Range};

use super::config::BoardConfig;
use super::player::Side;
use crate::rules::ConfigError;

/// Inline capacity covers the standard 14-slot board.
pub type Slots = SmallVec<[u32; 14]>;

/// Seed counts for every pit and store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Board {
    slots: Slots,
}

impl Board {
    /// Starting position: every pit holds `seeds_per_pit`, stores empty.
    #[must_use]
    pub fn standard(config: &BoardConfig) -> Self {
        let mut slots = Slots::from_elem(config.seeds_per_pit, config.slot_count());
        for side in Side::ALL {
            slots[side.index() * config.side_len() + config.pits_per_side] = 0;
        }
        Self { slots }
    }

    /// Build a board from explicit slot values laid out for `config`.
    pub fn from_slots(config: &BoardConfig, slots: &[u32]) -> Result<Self, ConfigError> {
        if slots.len() != config.slot_count() {
            return Err(ConfigError::BoardShape {
                expected: config.slot_count(),
                found: slots.len(),
            });
        }
        Ok(Self {
            slots: Slots::from_slice(slots),
        })
    }

    /// All slot values in absolute order.
    #[must_use]
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [u32] {
        &mut self.slots
    }

    /// Number of slots, stores included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pits per side, derived from the slot count.
    #[must_use]
    pub fn pits_per_side(&self) -> usize {
        self.slots.len() / 2 - 1
    }

    /// Absolute index of a side's store.
    #[must_use]
    pub fn store_index(&self, side: Side) -> usize {
        side.index() * (self.pits_per_side() + 1) + self.pits_per_side()
    }

    /// Absolute index range of a side's pits.
    #[must_use]
    pub fn pit_range(&self, side: Side) -> Range<usize> {
        let start = side.index() * (self.pits_per_side() + 1);
        start..start + self.pits_per_side()
    }

    /// A side's pits, in sowing order.
    #[must_use]
    pub fn pits(&self, side: Side) -> &[u32] {
        &self.slots[self.pit_range(side)]
    }

    /// Seeds in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u32 {
        self.slots[self.store_index(side)]
    }

    /// Seeds left in a side's pits (store excluded).
    #[must_use]
    pub fn pit_seeds(&self, side: Side) -> u32 {
        self.pits(side).iter().sum()
    }

    /// Seeds on the whole board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// Index of the pit facing `index` across the board.
    ///
    /// Only meaningful for pit indices; stores have no opposite.
    #[must_use]
    pub fn opposite(&self, index: usize) -> usize {
        debug_assert!(index < self.slots.len() - 1 && index != self.pits_per_side());
        2 * self.pits_per_side() - index
    }

    /// Rotate so `side`'s pits are `0..P` and its store is `P`.
    #[must_use]
    pub fn to_perspective(&self, side: Side) -> Board {
        let mut slots = self.slots.clone();
        slots.rotate_left(side.index() * (self.pits_per_side() + 1));
        Board { slots }
    }

    /// Inverse of [`Board::to_perspective`].
    #[must_use]
    pub fn to_absolute(&self, side: Side) -> Board {
        let mut slots = self.slots.clone();
        slots.rotate_right(side.index() * (self.pits_per_side() + 1));
        Board { slots }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard(&BoardConfig::standard())
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl TryFrom<Vec<u32>> for Board {
    type Error = ConfigError;

    fn try_from(slots: Vec<u32>) -> Result<Self, Self::Error> {
        if slots.len() < 4 || slots.len() % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "board must have an even number of slots >= 4, got {}",
                slots.len()
            )));
        }
        Ok(Self {
            slots: Slots::from_vec(slots),
        })
    }
}

impl From<Board> for Vec<u32> {
    fn from(board: Board) -> Self {
        board.slots.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(slots: &[u32]) -> Board {
        Board::from_slots(&BoardConfig::standard(), slots).unwrap()
    }

    #[test]
    fn test_standard_board() {
        let b = Board::default();
        assert_eq!(b.slots(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(b.total_seeds(), 48);
        assert_eq!(b.pits_per_side(), 6);
    }

    #[test]
    fn test_small_board() {
        let config = BoardConfig::standard().with_pits_per_side(3).with_seeds_per_pit(2);
        let b = Board::standard(&config);
        assert_eq!(b.slots(), &[2, 2, 2, 0, 2, 2, 2, 0]);
        assert_eq!(b.store_index(Side::Two), 7);
    }

    #[test]
    fn test_layout_queries() {
        let b = board(&[1, 2, 3, 4, 5, 6, 10, 7, 8, 9, 10, 11, 12, 20]);

        assert_eq!(b.store_index(Side::One), 6);
        assert_eq!(b.store_index(Side::Two), 13);
        assert_eq!(b.pit_range(Side::Two), 7..13);
        assert_eq!(b.pits(Side::One), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(b.store(Side::One), 10);
        assert_eq!(b.store(Side::Two), 20);
        assert_eq!(b.pit_seeds(Side::One), 21);
        assert_eq!(b.pit_seeds(Side::Two), 57);
        assert_eq!(b[9], 9);
    }

    #[test]
    fn test_opposite() {
        let b = Board::default();
        assert_eq!(b.opposite(0), 12);
        assert_eq!(b.opposite(2), 10);
        assert_eq!(b.opposite(5), 7);
        assert_eq!(b.opposite(12), 0);
    }

    #[test]
    fn test_perspective_side_one_is_identity() {
        let b = board(&[1, 2, 3, 4, 5, 6, 10, 7, 8, 9, 10, 11, 12, 20]);
        assert_eq!(b.to_perspective(Side::One), b);
        assert_eq!(b.to_absolute(Side::One), b);
    }

    #[test]
    fn test_perspective_side_two_swaps_halves() {
        let b = board(&[1, 2, 3, 4, 5, 6, 10, 7, 8, 9, 10, 11, 12, 20]);
        let rotated = b.to_perspective(Side::Two);

        assert_eq!(
            rotated.slots(),
            &[7, 8, 9, 10, 11, 12, 20, 1, 2, 3, 4, 5, 6, 10]
        );
        assert_eq!(rotated.to_absolute(Side::Two), b);
    }

    #[test]
    fn test_from_slots_rejects_wrong_length() {
        let err = Board::from_slots(&BoardConfig::standard(), &[0; 12]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BoardShape {
                expected: 14,
                found: 12
            }
        );
    }

    #[test]
    fn test_serde_as_plain_sequence() {
        let b = Board::default();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[4,4,4,4,4,4,0,4,4,4,4,4,4,0]");

        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, b);

        assert!(serde_json::from_str::<Board>("[1,2,3]").is_err());
    }
}
