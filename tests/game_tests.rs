//! Game state machine integration tests.

use tictactoe::{Board, Cell, GameError, GameState, Mark, Outcome};

fn play(start: Mark, moves: &[usize]) -> GameState {
    let mut state = GameState::new(start);
    for &m in moves {
        assert!(state.make_move(m), "move {} rejected", m);
    }
    state
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_fresh_game() {
    for mark in Mark::ALL {
        let state = GameState::new(mark);
        assert_eq!(state.available_moves().len(), 9);
        assert_eq!(state.winner(), None);
        assert!(!state.is_draw());
        assert_eq!(state.current_player(), mark);
    }
}

#[test]
fn test_default_starts_with_x() {
    assert_eq!(GameState::default(), GameState::new(Mark::X));
}

#[test]
fn test_invalid_starting_symbol() {
    for bad in ["", "Z", "XO", "1"] {
        assert_eq!(
            GameState::with_symbol(bad),
            Err(GameError::InvalidPlayer(bad.to_string()))
        );
    }
    assert_eq!(GameState::with_symbol("x"), Ok(GameState::new(Mark::X)));
}

// =============================================================================
// Move Application
// =============================================================================

#[test]
fn test_available_moves_ascending() {
    let state = play(Mark::X, &[4, 0, 8]);
    assert_eq!(state.available_moves().as_slice(), &[1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_occupied_cell_rejected_unchanged() {
    let mut state = play(Mark::X, &[4, 0]);
    let before = state.clone();

    assert!(!state.make_move(4));
    assert!(!state.make_move(0));
    assert_eq!(state, before);
}

#[test]
fn test_turn_alternates() {
    let mut state = GameState::new(Mark::O);
    let mut expected = Mark::O;
    for m in [0, 4, 8, 2] {
        assert_eq!(state.current_player(), expected);
        assert!(state.make_move(m));
        expected = expected.opponent();
    }
    assert_eq!(state.board().get(0), Some(Cell::Marked(Mark::O)));
    assert_eq!(state.board().get(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(state.available_moves().len(), 5);
}

// =============================================================================
// Terminal Detection
// =============================================================================

#[test]
fn test_row_win() {
    let state = play(Mark::X, &[0, 3, 1, 4, 2]);
    assert_eq!(state.winner(), Some(Mark::X));
    assert!(state.game_over());
}

#[test]
fn test_diagonal_win() {
    let state = play(Mark::X, &[0, 1, 4, 2, 8]);
    assert_eq!(state.winner(), Some(Mark::X));
}

#[test]
fn test_column_win_for_second_player() {
    let state = play(Mark::X, &[0, 1, 3, 4, 8, 7]);
    assert_eq!(state.winner(), Some(Mark::O));
    assert_eq!(state.outcome(), Some(Outcome::Winner(Mark::O)));
}

#[test]
fn test_draw_sequence() {
    let state = play(Mark::X, &[0, 1, 2, 5, 3, 4, 8, 6, 7]);
    assert_eq!(state.winner(), None);
    assert!(state.is_draw());
    assert!(state.game_over());
    assert_eq!(state.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_terminal_state_rejects_everything() {
    let mut state = play(Mark::X, &[0, 3, 1, 4, 2]);
    let before = state.clone();
    for m in 0..12 {
        assert!(!state.make_move(m));
    }
    assert_eq!(state, before);
}

// =============================================================================
// Clone, Reset, Display
// =============================================================================

#[test]
fn test_clone_round_trip_independence() {
    let original = play(Mark::X, &[0, 4]);
    let mut clone = original.clone();
    assert_eq!(clone, original);

    assert!(clone.make_move(1));
    assert!(clone.make_move(8));
    assert!(clone.make_move(2));
    assert_eq!(clone.winner(), Some(Mark::X));

    assert_eq!(original.winner(), None);
    assert_eq!(original.current_player(), Mark::X);
    assert_eq!(original.board().get(1), Some(Cell::Empty));
    assert_eq!(original.available_moves().len(), 7);
}

#[test]
fn test_reset_mid_game() {
    let mut state = play(Mark::X, &[0, 4, 8]);
    state.reset(Mark::X);
    assert_eq!(state, GameState::new(Mark::X));
}

#[test]
fn test_from_board_position() {
    let board: Board = "XX. .O. ...".parse().unwrap();
    let mut state = GameState::from_board(board, Mark::O);
    assert_eq!(state.winner(), None);
    assert!(state.make_move(2));
    assert_eq!(state.current_player(), Mark::X);
}

#[test]
fn test_pretty_board_full_game() {
    let state = play(Mark::X, &[0, 1, 2, 5, 3, 4, 8, 6, 7]);
    assert_eq!(
        state.pretty_board(),
        " X | O | X \n-----------\n X | O | O \n-----------\n O | X | X "
    );
}
