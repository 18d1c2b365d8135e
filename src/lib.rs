//! # tictactoe
//!
//! Tic-Tac-Toe game state with an optimal minimax opponent.
//!
//! ## Design
//!
//! 1. **State machine**: `GameState` owns the board, the turn and the
//!    winner. Moves go through `make_move`, which either applies the whole
//!    move or leaves the state untouched.
//!
//! 2. **Exact search**: the game tree is tiny, so `MinimaxSearch` searches
//!    every line to the end. Alpha-beta pruning only saves time.
//!
//! 3. **Injected randomness**: the random-move path draws from a seedable
//!    `GameRng` owned by the search, never from global state.
//!
//! ## Modules
//!
//! - `core`: Marks, board, game state, RNG
//! - `search`: Minimax search, configuration, statistics
//! - `error`: Error taxonomy
//!
//! A text front end drives the crate with `available_moves`, `make_move`,
//! `game_over`, `winner`/`outcome`, `pretty_board` and `best_move`.

pub mod core;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, GameState, Mark, Moves, Outcome};
pub use crate::error::GameError;
pub use crate::search::{best_move, random_move, MinimaxSearch, SearchConfig, SearchStats};
