//! Game state machine: board, turn, and terminal outcome.
//!
//! ## Lifecycle
//!
//! A `GameState` starts empty with a chosen first mark and changes only
//! through [`GameState::make_move`]. Each accepted move places the current
//! mark, re-checks all 8 win-lines, and hands the turn to the opponent
//! unless the game just ended.
//!
//! ## Terminal states
//!
//! - **Won**: `winner()` is `Some`. Never cleared afterwards.
//! - **Drawn**: no winner and no empty cell. Derived, not stored.
//!
//! Cloning is a full copy; search branches never share storage with
//! each other or with the caller's state.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::board::{Board, Moves, CELLS};
use super::Mark;
use crate::error::GameError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Board full, no win-line.
    Draw,
}

/// Complete Tic-Tac-Toe game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    winner: Option<Mark>,
}

impl GameState {
    /// Create an empty game with `starting_player` to move.
    #[must_use]
    pub fn new(starting_player: Mark) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            winner: None,
        }
    }

    /// Create an empty game from a starting-player symbol (`"X"` or `"O"`).
    ///
    /// ```
    /// use tictactoe::core::{GameState, Mark};
    ///
    /// assert_eq!(GameState::with_symbol("O").unwrap().current_player(), Mark::O);
    /// assert!(GameState::with_symbol("Q").is_err());
    /// ```
    pub fn with_symbol(symbol: &str) -> Result<Self, GameError> {
        Ok(Self::new(symbol.parse()?))
    }

    /// Build a state from an arbitrary position.
    ///
    /// The winner is derived from the board. No turn-count validation is
    /// done, so positions unreachable in real play are accepted.
    #[must_use]
    pub fn from_board(board: Board, current_player: Mark) -> Self {
        Self {
            winner: board.winner(),
            board,
            current_player,
        }
    }

    /// Reinitialise to an empty game.
    pub fn reset(&mut self, starting_player: Mark) {
        *self = Self::new(starting_player);
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Override whose turn it is.
    ///
    /// Lets the search ask "what if `mark` moved now" regardless of the
    /// real turn order.
    pub fn set_current_player(&mut self, mark: Mark) {
        self.current_player = mark;
    }

    /// Winning mark, if a win-line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn available_moves(&self) -> Moves {
        self.board.empty_cells()
    }

    /// Apply the current player's mark at `position`.
    ///
    /// Returns `false` without touching the state if the game is already
    /// won, `position` is off the board, or the cell is taken.
    pub fn make_move(&mut self, position: usize) -> bool {
        if self.winner.is_some() {
            trace!(position, "move rejected: game already won");
            return false;
        }
        if position >= CELLS {
            trace!(position, "move rejected: out of range");
            return false;
        }
        if !self.board.cells()[position].is_empty() {
            trace!(position, "move rejected: cell occupied");
            return false;
        }

        let mover = self.current_player;
        self.board.place(position, mover);
        self.winner = self.board.winner();

        if let Some(winner) = self.winner {
            debug!(%winner, position, "game won");
        } else if self.board.is_full() {
            debug!(position, "game drawn");
        } else {
            self.current_player = mover.opponent();
        }

        true
    }

    /// No winner and no empty cell.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Won or drawn.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.winner.is_some() || self.is_draw()
    }

    /// Final result, or `None` while the game is in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(mark) => Some(Outcome::Winner(mark)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Board text with indices in empty cells, for move entry.
    #[must_use]
    pub fn pretty_board(&self) -> String {
        self.board.to_string()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
