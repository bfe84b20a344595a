//! Player identification and the two-seat roster.
//!
//! ## Side
//!
//! Kalah is strictly two-player. `Side` names a seat; player number 1 sits
//! on `Side::One` (pits 0-5, store 6) and player number 2 on `Side::Two`
//! (pits 7-12, store 13).
//!
//! ## Roster
//!
//! Holds up to two named `Player`s, filled in creation order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::rules::{MoveError, RosterError};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides in seating order.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    /// Convert a 1-based player number.
    pub fn from_number(number: u8) -> Result<Self, MoveError> {
        match number {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(MoveError::InvalidPlayer(other)),
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Per-side data storage, indexable by `Side`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from a factory function called once per side.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}

/// A named participant. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    side: Side,
    name: String,
}

impl Player {
    /// The seat this player occupies.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The two player seats, filled in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: SideMap<Option<Player>>,
}

impl Roster {
    /// Seat a new player in the first free seat.
    pub fn create(&mut self, name: impl Into<String>) -> Result<&Player, RosterError> {
        let side = Side::ALL
            .into_iter()
            .find(|&side| self.seats[side].is_none())
            .ok_or(RosterError::Full)?;

        let player = self.seats[side].insert(Player {
            side,
            name: name.into(),
        });
        Ok(&*player)
    }

    /// The player seated at `side`, if any.
    #[must_use]
    pub fn get(&self, side: Side) -> Option<&Player> {
        self.seats[side].as_ref()
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.iter().filter(|(_, p)| p.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
