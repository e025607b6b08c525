use board_search::board::{Board, InvalidMoveIndex, Player};

mod ttt;

/// Generic checks that every [Board] implementation has to pass, for one specific board state.
pub fn board_test_main<B: Board>(board: &B) {
    let moves = board.legal_moves();

    // move enumeration is deterministic
    assert_eq!(moves, board.legal_moves(), "legal_moves must be deterministic");

    // a board with moves left has a player to make them
    if !moves.is_empty() {
        assert!(
            board.next_player().is_some(),
            "board with legal moves must have a next player: {}",
            board
        );
    }

    // out-of-range indices fail without modifying the board
    for &index in &[moves.len(), moves.len() + 3, usize::MAX] {
        let mut copy = board.clone();
        let result = copy.play(index);
        assert_eq!(
            result,
            Err(InvalidMoveIndex {
                index,
                len: moves.len()
            })
        );
        assert_eq!(&copy, board, "failed play must leave the board untouched");
    }

    // playing on a clone never affects the original
    for index in 0..moves.len() {
        let child = board.clone_and_play(index).unwrap();
        assert_eq!(moves, board.legal_moves(), "original changed by playing on a clone");
        // the child derives its own move list instead of inheriting the parent's
        let _ = child.legal_moves();
    }

    // score sign convention
    assert_eq!(board.score_for(Player::A), board.score());
    assert_eq!(board.score_for(Player::B), -board.score());
}
