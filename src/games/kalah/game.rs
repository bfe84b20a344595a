//! Kalah engine implementation.

use smallvec::SmallVec;

use crate::core::{Board, BoardConfig, Landing, Move, MoveRecord, Player, Roster, Side};
use crate::rules::{ConfigError, GameResult, MoveError, RosterError, Status};

/// Legal pit numbers for one side. Inline for the standard six pits.
pub type LegalMoves = SmallVec<[usize; 6]>;

/// What a successful move did, handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the move (absolute indices, sweep applied).
    pub board: Board,

    /// Where the last seed went.
    pub landing: Landing,

    /// The mover earned another turn. Nothing is applied automatically.
    pub extra_turn: bool,

    /// Game status after the move.
    pub status: Status,

    /// Who should move next: the mover again on an extra turn, otherwise
    /// the opponent. Advisory only.
    pub next_side: Side,
}

/// A game of Kalah: board, players, result and history.
///
/// The board changes only through [`Kalah::apply_move`]. Once a result is
/// recorded it is permanent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kalah {
    config: BoardConfig,
    board: Board,
    roster: Roster,
    result: Option<GameResult>,
    history: Vec<MoveRecord>,
}

/// Builder for creating a Kalah game.
#[derive(Clone, Debug, Default)]
pub struct KalahBuilder {
    config: BoardConfig,
    players: Vec<String>,
    board: Option<Board>,
}

impl KalahBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Seat a player. The first call seats player 1, the second player 2.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Start from a custom position instead of the opening layout.
    ///
    /// The end-of-game check is not run here; it runs after the next move.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<Kalah, ConfigError> {
        self.config.validate()?;

        let board = match self.board {
            Some(board) if board.len() != self.config.slot_count() => {
                return Err(ConfigError::BoardShape {
                    expected: self.config.slot_count(),
                    found: board.len(),
                });
            }
            Some(board) => board,
            None => Board::standard(&self.config),
        };

        let mut roster = Roster::default();
        for name in self.players {
            roster
                .create(name)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        Ok(Kalah {
            config: self.config,
            board,
            roster,
            result: None,
            history: Vec::new(),
        })
    }
}

impl Default for Kalah {
    fn default() -> Self {
        Self::new()
    }
}

impl Kalah {
    /// A standard 6-pit, 4-seed game with no players seated yet.
    #[must_use]
    pub fn new() -> Self {
        let config = BoardConfig::standard();
        Self {
            board: Board::standard(&config),
            config,
            roster: Roster::default(),
            result: None,
            history: Vec::new(),
        }
    }

    /// Shorthand for `KalahBuilder::new()`.
    pub fn builder() -> KalahBuilder {
        KalahBuilder::new()
    }

    /// Get the board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Board snapshot for display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seat a new player. At most two players can be created.
    pub fn create_player(&mut self, name: impl Into<String>) -> Result<&Player, RosterError> {
        let player = self.roster.create(name)?;
        log::debug!("seated {} as {}", player.name(), player.side());
        Ok(player)
    }

    /// The player seated at `side`, if created.
    pub fn player(&self, side: Side) -> Option<&Player> {
        self.roster.get(side)
    }

    /// Current game status.
    pub fn result(&self) -> Status {
        self.result.into()
    }

    /// Check if the game is over.
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Status as a sentence naming the winner when known.
    pub fn result_message(&self) -> String {
        match self.result {
            None => "Game has not ended".to_string(),
            Some(GameResult::Tie) => "It's a tie".to_string(),
            Some(GameResult::Winner(side)) => match self.player(side) {
                Some(player) => format!("Winner is {side}: {}", player.name()),
                None => format!("Winner is {side}"),
            },
        }
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Non-empty pits `side` may sow from (1-based). Empty once the game is over.
    ///
    /// An empty list while the game is running means `side` has no seeds:
    /// any pit then passes and settles the game.
    pub fn legal_moves(&self, side: Side) -> LegalMoves {
        if self.is_terminal() {
            return LegalMoves::new();
        }

        self.board
            .pits(side)
            .iter()
            .enumerate()
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Sow the seeds of `pit` (1-based) for `side`.
    ///
    /// When `side` has no seeds anywhere, any pit in range is accepted as a
    /// pass: nothing is sown and the end-of-game check settles the game.
    /// Rejected moves leave the game untouched.
    pub fn apply_move(&mut self, side: Side, pit: usize) -> Result<MoveOutcome, MoveError> {
        let pits = self.config.pits_per_side;
        if pit == 0 || pit > pits {
            return Err(MoveError::InvalidPit { pit, max: pits });
        }
        if self.result.is_some() {
            return Err(MoveError::GameAlreadyEnded);
        }
        let start = self.board.pit_range(side).start + pit - 1;
        if self.board[start] == 0 && self.board.pit_seeds(side) > 0 {
            return Err(MoveError::EmptyPit { pit });
        }

        let seeds_before = self.board.total_seeds();
        let (sown, landing) = if self.board[start] == 0 {
            log::debug!("{side} has no seeds left, passing");
            (0, Landing::Pass)
        } else {
            let mut relative = self.board.to_perspective(side);
            let sown = sow(&mut relative, pit - 1);
            self.board = relative.to_absolute(side);
            sown
        };
        debug_assert_eq!(self.board.total_seeds(), seeds_before, "sowing must conserve seeds");

        log::debug!("{side} sowed {sown} seeds from pit {pit}: {landing:?}");
        match landing {
            Landing::Capture { captured } => log::debug!("{side} captured {captured} seeds"),
            Landing::Store => log::debug!("{side} earned an extra turn"),
            Landing::Pit | Landing::Pass => {}
        }

        self.history.push(MoveRecord {
            mv: Move::new(side, pit),
            sown,
            landing,
            sequence: self.history.len(),
        });

        self.check_game_over();
        debug_assert_eq!(self.board.total_seeds(), seeds_before, "sweep must conserve seeds");

        let status = self.result();
        let extra_turn = landing.is_extra_turn();
        let next_side = if extra_turn && !status.is_finished() {
            side
        } else {
            side.opponent()
        };

        Ok(MoveOutcome {
            board: self.board.clone(),
            landing,
            extra_turn,
            status,
            next_side,
        })
    }

    /// If either side's pits are empty, the other side sweeps its pits into
    /// its store and the result is fixed.
    fn check_game_over(&mut self) {
        let sweeper = if self.board.pit_seeds(Side::One) == 0 {
            Side::Two
        } else if self.board.pit_seeds(Side::Two) == 0 {
            Side::One
        } else {
            return;
        };

        let pits = self.board.pit_range(sweeper);
        let store = self.board.store_index(sweeper);
        let slots = self.board.slots_mut();
        let swept: u32 = slots[pits.clone()].iter().sum();
        slots[pits].fill(0);
        slots[store] += swept;

        let result = GameResult::from_stores(
            self.board.store(Side::One),
            self.board.store(Side::Two),
        );
        log::info!(
            "game over ({sweeper} swept {swept}): {result}, stores {}-{}",
            self.board.store(Side::One),
            self.board.store(Side::Two)
        );
        self.result = Some(result);
    }
}

/// Sow from `origin` on a board already in the mover's perspective
/// (own pits `0..P`, own store `P`, opponent store last).
///
/// Returns the seeds picked up and where the last one landed.
fn sow(board: &mut Board, origin: usize) -> (u32, Landing) {
    let len = board.len();
    let slots = board.slots_mut();
    let seeds = slots[origin];
    debug_assert!(seeds > 0);
    slots[origin] = 0;

    let mut index = origin;
    for _ in 1..seeds {
        index = next_slot(len, index);
        slots[index] += 1;
    }

    let landing = next_slot(len, index);
    (seeds, land(board, landing))
}

/// Next slot to the right, skipping the opponent's store.
fn next_slot(len: usize, index: usize) -> usize {
    let next = index + 1;
    if next >= len - 1 {
        0
    } else {
        next
    }
}

/// Deposit the final seed at `index`, applying capture and extra-turn rules.
fn land(board: &mut Board, index: usize) -> Landing {
    let store = board.store_index(Side::One);

    if index < store && board[index] == 0 {
        let opposite = board.opposite(index);
        let slots = board.slots_mut();
        if slots[opposite] != 0 {
            let captured = slots[opposite] + 1;
            slots[opposite] = 0;
            slots[store] += captured;
            return Landing::Capture { captured };
        }
    }

    board.slots_mut()[index] += 1;
    if index == store {
        Landing::Store
    } else {
        Landing::Pit
    }
}
