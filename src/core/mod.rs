//! Core game types: marks, board, game state machine, RNG.
//!
//! Nothing here knows about search. The search module drives a `GameState`
//! only through its public queries and `make_move`.

pub mod board;
pub mod mark;
pub mod rng;
pub mod state;

pub use board::{Board, Cell, Moves, CELLS, WIN_LINES};
pub use mark::Mark;
pub use rng::GameRng;
pub use state::{GameState, Outcome};
