//! Two simple strategies: `RandomStrategy` and `GreedyStrategy`.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::{SearchHandle, Strategy};
use crate::board::Board;

/// Strategy that chooses moves randomly uniformly among the legal moves.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomStrategy<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomStrategy")
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl<B: Board, R: Rng + Send> Strategy<B> for RandomStrategy<R> {
    fn select_move(&mut self, board: &B, _depth: u32, handle: &SearchHandle) -> Option<usize> {
        let index = board.random_move_index(&mut self.rng);
        handle.report_progress(1.0);
        index
    }
}

/// Strategy that looks a single ply ahead and keeps the move with the best heuristic score for
/// the side to move. Ties keep the first move found, in legal-move order.
///
/// The depth budget is ignored beyond the single ply.
#[derive(Debug)]
pub struct GreedyStrategy;

impl<B: Board> Strategy<B> for GreedyStrategy {
    fn select_move(&mut self, board: &B, _depth: u32, handle: &SearchHandle) -> Option<usize> {
        let player = board.next_player()?;
        let moves = board.legal_moves();
        let count = moves.len();

        let mut best: Option<(usize, i32)> = None;
        for index in 0..count {
            if handle.is_cancelled() {
                break;
            }

            // SAFETY: unwrap is safe because `index` is within the legal-move range.
            let child = board.clone_and_play(index).unwrap();
            let value = child.score_for(player);

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((index, value));
            }

            handle.report_progress((index + 1) as f32 / count as f32);
        }

        best.map(|(index, _)| index)
    }
}
