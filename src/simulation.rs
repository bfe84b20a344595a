//! Random playouts and move-tree counting.
//!
//! Both walk the game the way a real match would: the mover keeps the turn
//! after an extra-turn landing, otherwise play passes to the opponent.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Side};
use crate::games::kalah::Kalah;
use crate::rules::{GameResult, MoveError};

/// Summary of one finished random game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playout {
    /// Final result.
    pub result: GameResult,

    /// Board after the final sweep.
    pub board: Board,

    /// Moves applied, extra turns included.
    pub moves: u32,
}

/// Play uniformly random legal moves from `game` until it ends.
///
/// `to_move` is the side to act first. The input game is not modified.
///
/// ```
/// use kalah::core::Side;
/// use kalah::games::kalah::Kalah;
/// use kalah::simulation::random_playout;
///
/// let playout = random_playout(&Kalah::new(), Side::One, 42).unwrap();
/// assert_eq!(playout.board.total_seeds(), 48);
/// ```
pub fn random_playout(game: &Kalah, to_move: Side, seed: u64) -> Result<Playout, MoveError> {
    play_out(game, to_move, &mut GameRng::new(seed))
}

/// Run `count` independent playouts, each on its own fork of `seed`.
pub fn batch_random_playouts(
    game: &Kalah,
    to_move: Side,
    seed: u64,
    count: usize,
) -> Result<Vec<Playout>, MoveError> {
    let mut rng = GameRng::new(seed);
    (0..count)
        .map(|_| play_out(game, to_move, &mut rng.fork()))
        .collect()
}

fn play_out(game: &Kalah, to_move: Side, rng: &mut GameRng) -> Result<Playout, MoveError> {
    let mut game = game.clone();
    let mut side = to_move;
    let mut moves = 0u32;

    loop {
        if let Some(result) = game.result().result() {
            log::debug!("playout {} finished after {moves} moves: {result}", rng.seed());
            return Ok(Playout {
                result,
                board: game.board().clone(),
                moves,
            });
        }

        let pit = rng.pick(&game.legal_moves(side)).unwrap_or(PASS_PIT);
        side = game.apply_move(side, pit)?.next_side;
        moves += 1;
    }
}

/// Pit used when the side to move has no seeds. Any pit passes.
const PASS_PIT: usize = 1;

/// Count move sequences of length `depth` starting with `to_move`.
///
/// Finished positions count as a single leaf regardless of remaining depth.
/// A side with no seeds has exactly one move, the pass that ends the game.
pub fn perft(game: &Kalah, to_move: Side, depth: u32) -> u64 {
    if depth == 0 || game.is_terminal() {
        return 1;
    }

    let mut pits = game.legal_moves(to_move);
    if pits.is_empty() {
        pits.push(PASS_PIT);
    }

    pits.into_iter()
        .map(|pit| {
            let mut child = game.clone();
            match child.apply_move(to_move, pit) {
                Ok(outcome) => perft(&child, outcome.next_side, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}
