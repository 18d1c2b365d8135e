//! Error types for the game engine and move search.

/// Errors reported by the game and search APIs.
///
/// Rejected moves are not errors: [`GameState::make_move`] returns `false`
/// for those.
///
/// [`GameState::make_move`]: crate::core::GameState::make_move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid player {0:?}: expected 'X' or 'O'")]
    InvalidPlayer(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("no legal moves available")]
    NoLegalMoves,
}
