//! # kalah
//!
//! A rules engine for Kalah, the common Mancala variant: six pits and a store
//! per side, four seeds per pit.
//!
//! ## Design Principles
//!
//! 1. **One sowing algorithm**: Moves are resolved from the mover's point of
//!    view. The board is rotated into that perspective, sown, and rotated
//!    back, so there is no per-player copy of the rules.
//!
//! 2. **Atomic moves**: Every precondition is checked before the board is
//!    touched. A move applies fully or returns an error.
//!
//! 3. **Signals, not hidden state**: The extra-turn flag is part of the
//!    returned `MoveOutcome`. The engine never queues turns itself.
//!
//! ## Modules
//!
//! - `core`: Board layout, sides and players, moves, RNG, configuration
//! - `rules`: Game results and error types
//! - `games`: The `Kalah` engine
//! - `simulation`: Random playouts and perft
//!
//! ```
//! use kalah::{Kalah, Side, Status};
//!
//! let mut game = Kalah::new();
//! let outcome = game.apply_move(Side::One, 3).unwrap();
//! assert!(outcome.extra_turn);
//! assert_eq!(game.result(), Status::InProgress);
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig,
    Player, Roster, Side, SideMap,
    Move, MoveRecord, Landing,
    GameRng,
};

pub use crate::rules::{ConfigError, GameResult, MoveError, RosterError, Status};

pub use crate::games::kalah::{Kalah, KalahBuilder, LegalMoves, MoveOutcome};

pub use crate::simulation::{batch_random_playouts, perft, random_playout, Playout};
