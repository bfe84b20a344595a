//! Kalah, the common Mancala variant.
//!
//! Two sides of pits with a store at each end. A move picks up every seed
//! in one of the mover's pits and sows them counter-clockwise, skipping the
//! opponent's store:
//! - Last seed in the mover's store: the mover goes again
//! - Last seed in an empty own pit facing a non-empty pit: both are captured
//! - When one side runs out of seeds, the other side keeps its remainder
//!
//! The larger store wins.

mod game;

pub use game::{Kalah, KalahBuilder, LegalMoves, MoveOutcome};
