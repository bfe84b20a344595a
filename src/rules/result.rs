//! Game outcome and status.

use serde::{Deserialize, Serialize};

use crate::core::player::Side;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal stores.
    Tie,
}

impl GameResult {
    /// Compare final store totals. Strictly more seeds wins.
    #[must_use]
    pub fn from_stores(store_one: u32, store_two: u32) -> Self {
        match store_one.cmp(&store_two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::One),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Tie => f.write_str("tie"),
        }
    }
}

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Finished(GameResult),
}

impl Status {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Finished(_))
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Status::Finished(result) => Some(*result),
            Status::InProgress => None,
        }
    }
}

impl From<Option<GameResult>> for Status {
    fn from(result: Option<GameResult>) -> Self {
        result.map_or(Status::InProgress, Status::Finished)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => f.write_str("in progress"),
            Status::Finished(result) => write!(f, "{result}"),
        }
    }
}
