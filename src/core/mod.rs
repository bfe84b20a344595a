//! Core engine types: board, players, moves, RNG, configuration.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Landing, Move, MoveRecord};
pub use board::{Board, Slots};
pub use config::{BoardConfig, MAX_PITS, MAX_SEEDS_PER_PIT, STANDARD_PITS, STANDARD_SEEDS};
pub use player::{Player, Roster, Side, SideMap};
pub use rng::GameRng;
