//! Moves and the move history.
//!
//! A Kalah move is a side plus a 1-based pit number. Each applied move is
//! recorded with what happened to its last seed, which is enough to replay or
//! audit a game.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A move request: sow from `pit` (1-based) on `side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub side: Side,
    pub pit: usize,
}

impl Move {
    #[must_use]
    pub const fn new(side: Side, pit: usize) -> Self {
        Self { side, pit }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pit {}", self.side, self.pit)
    }
}

/// Where the last sown seed ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// Ordinary deposit into a pit (either side).
    Pit,
    /// Landed in the mover's own store: the mover earns an extra turn.
    Store,
    /// Landed in an empty own pit opposite a non-empty one.
    /// `captured` counts the opposite seeds plus the landing seed.
    Capture { captured: u32 },
    /// The mover had no seeds at all; nothing was sown.
    Pass,
}

impl Landing {
    /// Whether this landing grants the mover another turn.
    #[must_use]
    pub fn is_extra_turn(self) -> bool {
        matches!(self, Landing::Store)
    }
}

/// A recorded move with its effect, for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// Seeds picked up from the starting pit.
    pub sown: u32,

    /// What the last seed did.
    pub landing: Landing,

    /// Position of this move in the game (starts at 0).
    pub sequence: usize,
}
