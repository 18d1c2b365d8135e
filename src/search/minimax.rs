//! Exact minimax search with alpha-beta pruning.
//!
//! Tic-Tac-Toe is small enough (at most 9 plies, branching at most 9) to
//! search every line to a won or drawn position, so there is no depth limit
//! and no heuristic evaluation. Terminal positions score `+1` for the
//! searching player's win, `-1` for a loss and `0` for a draw.
//!
//! The root is special: each candidate move is played with the turn forced
//! to the searching player, so `best_move(state, O)` answers "what should O
//! play here" even if the state says it is X's turn. Below the root the
//! cloned states alternate turns on their own.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{GameRng, GameState, Mark};
use crate::error::GameError;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns its configuration, RNG and statistics. The caller's `GameState` is
/// only read; every explored position is a fresh clone.
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// RNG for the random-move path.
    rng: GameRng,

    /// Statistics for the last query.
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search context.
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Optimal move for `player`, assuming both sides play perfectly after it.
    ///
    /// Ties go to the lowest index. Fails with `NoLegalMoves` if no cell is
    /// empty. On a won board every candidate scores the same terminal value,
    /// so the first empty cell is returned.
    #[instrument(level = "debug", skip_all, fields(%player))]
    pub fn best_move(&mut self, state: &GameState, player: Mark) -> Result<usize, GameError> {
        let start = Instant::now();
        self.stats.reset();

        let mut best: Option<(usize, i32)> = None;
        for position in state.available_moves() {
            let score = self.score_root_move(state, player, position);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        match best {
            Some((position, score)) => {
                debug!(
                    position,
                    score,
                    nodes = self.stats.nodes,
                    cutoffs = self.stats.cutoffs,
                    time_us = self.stats.time_us,
                    nodes_per_second = self.stats.nodes_per_second(),
                    "best move selected"
                );
                Ok(position)
            }
            None => self.random_move(state),
        }
    }

    /// Uniformly random empty cell.
    pub fn random_move(&mut self, state: &GameState) -> Result<usize, GameError> {
        let moves = state.available_moves();
        self.rng
            .choose(moves.as_slice())
            .copied()
            .ok_or(GameError::NoLegalMoves)
    }

    /// Exact minimax value of every empty cell for `player`, in ascending
    /// move order.
    ///
    /// These are the scores `best_move` compares. Empty on a full board.
    pub fn move_scores(&mut self, state: &GameState, player: Mark) -> Vec<(usize, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let scores = state
            .available_moves()
            .into_iter()
            .map(|position| (position, self.score_root_move(state, player, position)))
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scores
    }

    /// Play `position` as `player` on a clone and search the reply tree.
    ///
    /// Each root move gets a full window, so the score is exact even with
    /// pruning enabled. On a won board the move is rejected and the clone
    /// scores as the terminal position it already is.
    fn score_root_move(&mut self, state: &GameState, player: Mark, position: usize) -> i32 {
        let mut child = state.clone();
        child.set_current_player(player);
        let applied = child.make_move(position);
        debug_assert!(applied || state.game_over(), "root move {} should be legal", position);

        self.minimax(&child, player, false, i32::MIN, i32::MAX)
    }

    fn minimax(
        &mut self,
        state: &GameState,
        player: Mark,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if state.game_over() {
            self.stats.terminal_nodes += 1;
            return utility(state, player);
        }

        let mut value = if maximizing { i32::MIN } else { i32::MAX };

        for position in state.available_moves() {
            let mut child = state.clone();
            child.make_move(position);
            let score = self.minimax(&child, player, !maximizing, alpha, beta);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        value
    }

    /// Get statistics for the last query.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Optimal move for `player` using a default, entropy-seeded search.
///
/// ```
/// use tictactoe::core::{Board, GameState, Mark};
/// use tictactoe::search::best_move;
///
/// let board: Board = "OO. XX. ...".parse().unwrap();
/// let state = GameState::from_board(board, Mark::O);
/// assert_eq!(best_move(&state, Mark::O), Ok(2));
/// ```
pub fn best_move(state: &GameState, player: Mark) -> Result<usize, GameError> {
    MinimaxSearch::default().best_move(state, player)
}

/// Uniformly random empty cell using an entropy-seeded RNG.
pub fn random_move(state: &GameState) -> Result<usize, GameError> {
    MinimaxSearch::default().random_move(state)
}

/// Terminal score from `player`'s point of view.
fn utility(state: &GameState, player: Mark) -> i32 {
    match state.winner() {
        Some(winner) if winner == player => 1,
        Some(_) => -1,
        None => 0,
    }
}
