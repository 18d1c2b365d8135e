//! Move advice: exact minimax search and random play.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe::core::{GameState, Mark};
//! use tictactoe::search::{MinimaxSearch, SearchConfig};
//!
//! let mut state = GameState::new(Mark::X);
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_seed(1));
//!
//! while !state.game_over() {
//!     let mover = state.current_player();
//!     let position = search.best_move(&state, mover).unwrap();
//!     state.make_move(position);
//! }
//!
//! // Perfect play from both sides always draws.
//! assert!(state.is_draw());
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{best_move, random_move, MinimaxSearch};
pub use stats::SearchStats;
