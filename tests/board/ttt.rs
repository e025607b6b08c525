use board_search::board::{Board, Player};
use board_search::games::ttt::{Coord, TTTBoard};
use board_search::util::board_gen::board_with_moves;

use crate::board::board_test_main;

#[test]
fn empty() {
    let board = TTTBoard::default();
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.next_player(), Some(Player::A));
    assert_eq!(board.score(), 0);
    board_test_main(&board);
}

#[test]
fn one_move() {
    let mut board = TTTBoard::default();
    let mv = board.play(4).unwrap();
    assert_eq!(mv, Coord::from_xy(1, 1));
    assert_eq!(board.next_player(), Some(Player::B));
    assert_eq!(board.legal_moves().len(), 8);
    // the center touches four lines
    assert_eq!(board.score(), 4);
    board_test_main(&board);
}

#[test]
fn moves_stay_row_major() {
    let mut board = TTTBoard::default();
    board.play(0).unwrap();

    let moves = board.legal_moves();
    let indices: Vec<usize> = moves.iter().map(|mv| mv.i()).collect();
    assert_eq!(indices, (1..9).collect::<Vec<_>>());
    board_test_main(&board);
}

#[test]
fn won_board_is_terminal() {
    // A plays the left column, B follows in the middle column without finishing it
    let board = play_cells(&[0, 1, 3, 4, 6]);

    assert_eq!(board.winner(), Some(Player::A));
    assert_eq!(board.next_player(), None);
    assert!(board.is_terminal());
    assert_eq!(board.score(), TTTBoard::WIN_SCORE);
    board_test_main(&board);
}

#[test]
fn full_board_is_terminal() {
    // a draw: fill the whole board without three in a row
    // A A B
    // B B A
    // A B A
    let board = play_cells(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(board.winner(), None);
    assert_eq!(board.next_player(), None);
    assert!(board.is_terminal());
    board_test_main(&board);
}

#[test]
fn score_is_symmetric() {
    // opposite corners cancel out: A's open lines mirror B's
    let board = play_cells(&[0, 2]);
    assert_eq!(board.score(), 0);

    // a lone corner touches three open lines
    let board = board_with_moves(TTTBoard::default(), &[0]);
    assert_eq!(board.score(), 3);
}

/// Play the given cell numbers (0..9, row-major), alternating players, looking each one up in
/// the current legal-move list.
fn play_cells(cells: &[usize]) -> TTTBoard {
    let mut board = TTTBoard::default();
    for &cell in cells {
        let moves = board.legal_moves();
        let index = moves.iter().position(|mv| mv.i() == cell).unwrap();
        board.play(index).unwrap();
    }
    board
}
