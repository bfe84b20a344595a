//! Game results and the error taxonomy.
//!
//! Every error here is a caller-input or state-precondition violation,
//! detected before the board is touched.

pub mod error;
pub mod result;

pub use error::{ConfigError, MoveError, RosterError};
pub use result::{GameResult, Status};
