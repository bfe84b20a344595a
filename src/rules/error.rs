/// Errors returned when a move is rejected. The board is never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid pit {pit}: expected 1..={max}")]
    InvalidPit { pit: usize, max: usize },

    #[error("game is already over")]
    GameAlreadyEnded,

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },

    #[error("invalid player number {0}: expected 1 or 2")]
    InvalidPlayer(u8),
}

/// Errors from seating players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("both player seats are taken")]
    Full,
}

/// Errors from building a game or board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board has {found} slots, layout expects {expected}")]
    BoardShape { expected: usize, found: usize },
}
