//! Utilities to generate a `Board` in a random state, mostly useful for testing.
use rand::Rng;

use crate::board::Board;

/// Play the given move indices, starting from `start`.
///
/// Panics if any index is out of range for the board it is played on.
pub fn board_with_moves<B: Board>(start: B, indices: &[usize]) -> B {
    let mut curr = start;
    for &index in indices {
        match curr.play(index) {
            Ok(_) => {}
            Err(e) => panic!("playing index {} on {}: {}", index, curr, e),
        }
    }
    curr
}

/// Generate a non-terminal `Board` by playing `n` random moves on `start`.
///
/// Attempts that run out of moves early are restarted from scratch, so this loops forever if no
/// game of more than `n` moves is reachable from `start`.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    // this could be made faster with backtracking instead of starting from scratch,
    // but that only starts to matter for very high n
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.random_move_index(rng) {
                // SAFETY: unwrap is safe because the index came from the board itself
                Some(index) => {
                    board.play(index).unwrap();
                }
                None => continue 'new_try,
            }
        }
        if board.is_terminal() {
            continue 'new_try;
        }
        return board;
    }
}
