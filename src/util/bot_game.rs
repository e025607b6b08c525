//! Utility to run two strategies against each other synchronously.
use itertools::Itertools;

use crate::ai::{SearchHandle, Strategy};
use crate::board::{Board, Player};

/// The record of a finished game: the moves played (as indices) and the final position.
#[derive(Debug, Clone)]
pub struct Replay<B: Board> {
    pub start: B,
    pub moves: Vec<usize>,
    pub final_board: B,
    /// The heuristic score of the final position, positive favoring [Player::A].
    pub final_score: i32,
}

impl<B: Board> Replay<B> {
    /// The winner by final heuristic score, `None` for a level game.
    pub fn winner(&self) -> Option<Player> {
        match self.final_score {
            score if score > 0 => Some(Player::A),
            score if score < 0 => Some(Player::B),
            _ => None,
        }
    }

    pub fn move_list(&self) -> String {
        self.moves.iter().join(", ")
    }
}

/// Play a single game from `start`, `strategy_a` moving for [Player::A] and `strategy_b` for
/// [Player::B], both searching to `depth`. Runs until a side has no legal moves left.
pub fn play_game<B: Board>(
    start: &B,
    depth: u32,
    strategy_a: &mut impl Strategy<B>,
    strategy_b: &mut impl Strategy<B>,
) -> Replay<B> {
    let mut board = start.clone();
    let mut moves = vec![];
    let handle = SearchHandle::new();

    loop {
        let player = match board.next_player() {
            Some(player) => player,
            None => break,
        };

        let selected = match player {
            Player::A => strategy_a.select_move(&board, depth, &handle),
            Player::B => strategy_b.select_move(&board, depth, &handle),
        };

        match selected {
            // SAFETY: unwrap is safe because strategies only return indices within the
            // legal-move range of the board they were given
            Some(index) => {
                board.play(index).unwrap();
                moves.push(index);
            }
            None => break,
        }
    }

    let final_score = board.score();
    Replay {
        start: start.clone(),
        moves,
        final_board: board,
        final_score,
    }
}
