//! Depth-bounded adversarial search: plain minimax and alpha-beta minimax.
//!
//! Both searches maximize the absolute [Board::score] for [Player::A] and minimize it for
//! [Player::B], alternating at each level. Top-level move selection is a separate return channel
//! ([MinimaxResult::best_index]) from the recursive value computation, so the recursion itself
//! never threads a move output parameter around.
//!
//! Alpha-beta pruning changes how many nodes are visited, never the selected move: for any board
//! and depth [alpha_beta] picks the same index as [minimax].
use std::cmp::{max, min};

use log::trace;

use crate::ai::{SearchHandle, Strategy};
use crate::board::{Board, Player};

/// The result of a [minimax] or [alpha_beta] search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimaxResult {
    /// The value of the board, positive favoring [Player::A].
    pub value: i32,

    /// The index of the best move to play, `None` if the board has no legal moves.
    pub best_index: Option<usize>,

    /// How many nodes were visited, counting the root. Pruned searches visit a subset of the
    /// nodes an unpruned search visits.
    pub nodes: u64,
}

/// Evaluate `board` with unpruned minimax up to `depth` plies.
///
/// The root always expands one ply, so depth 0 degenerates to a direct one-ply scan with the same
/// comparison rule as [GreedyStrategy](crate::ai::simple::GreedyStrategy).
pub fn minimax<B: Board>(board: &B, depth: u32) -> MinimaxResult {
    search_root(board, depth, false, &SearchHandle::new())
}

/// Evaluate `board` with alpha-beta minimax up to `depth` plies.
///
/// Selects the same move as [minimax] while visiting at most as many nodes.
pub fn alpha_beta<B: Board>(board: &B, depth: u32) -> MinimaxResult {
    search_root(board, depth, true, &SearchHandle::new())
}

/// Strategy wrapper around [minimax].
#[derive(Debug)]
pub struct MinimaxStrategy;

impl<B: Board> Strategy<B> for MinimaxStrategy {
    fn select_move(&mut self, board: &B, depth: u32, handle: &SearchHandle) -> Option<usize> {
        search_root(board, depth, false, handle).best_index
    }
}

/// Strategy wrapper around [alpha_beta].
#[derive(Debug)]
pub struct AlphaBetaStrategy;

impl<B: Board> Strategy<B> for AlphaBetaStrategy {
    fn select_move(&mut self, board: &B, depth: u32, handle: &SearchHandle) -> Option<usize> {
        search_root(board, depth, true, handle).best_index
    }
}

/// The shared root of both searches.
///
/// Expands every root branch (the opposing bound is never set at the root, so there is no root
/// cutoff), reports progress as the fraction of root branches explored and observes cancellation
/// between branches. Children are searched at `depth - 1`, saturating at zero.
fn search_root<B: Board>(board: &B, depth: u32, prune: bool, handle: &SearchHandle) -> MinimaxResult {
    let moves = board.legal_moves();
    let count = moves.len();
    let mut nodes = 1;

    if count == 0 {
        handle.report_progress(1.0);
        return MinimaxResult {
            value: board.score(),
            best_index: None,
            nodes,
        };
    }

    // SAFETY: unwrap is safe because a board with legal moves has a next player.
    let player = board.next_player().unwrap();

    let mut alpha: Option<i32> = None;
    let mut beta: Option<i32> = None;
    let mut best_value: Option<i32> = None;
    let mut best_index: Option<usize> = None;

    for index in 0..count {
        if handle.is_cancelled() {
            break;
        }

        // SAFETY: unwrap is safe because `index` is within the legal-move range.
        let child = board.clone_and_play(index).unwrap();
        let value = search_value(&child, depth.saturating_sub(1), alpha, beta, prune, &mut nodes);

        // strictly-better comparison, so the first best move in legal-move order wins ties
        let better = match player {
            Player::A => best_value.map_or(true, |best| value > best),
            Player::B => best_value.map_or(true, |best| value < best),
        };
        if better {
            best_value = Some(value);
            best_index = Some(index);
        }

        if prune {
            match player {
                Player::A => alpha = Some(alpha.map_or(value, |a| max(a, value))),
                Player::B => beta = Some(beta.map_or(value, |b| min(b, value))),
            }
        }

        handle.report_progress((index + 1) as f32 / count as f32);
    }

    trace!(
        "search depth={} prune={} explored {} nodes, best {:?} value {:?}",
        depth,
        prune,
        nodes,
        best_index,
        best_value
    );

    MinimaxResult {
        // best_value is only None when the search was cancelled before the first branch,
        // fall back to the static evaluation in that case
        value: best_value.unwrap_or_else(|| board.score()),
        best_index,
        nodes,
    }
}

/// The recursive value computation.
///
/// `alpha` is the best value the maximizer ([Player::A]) is already guaranteed somewhere up the
/// tree, `beta` the same for the minimizer; `None` means "worse than any real score", so no
/// sentinel magnitude can collide with a legitimate heuristic value. Bounds are in absolute score
/// terms and passed down unchanged, which stays correct even for boards where one side moves
/// twice in a row.
fn search_value<B: Board>(
    board: &B,
    depth_left: u32,
    mut alpha: Option<i32>,
    mut beta: Option<i32>,
    prune: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let player = match board.next_player() {
        Some(player) => player,
        None => return board.score(),
    };
    if depth_left == 0 {
        return board.score();
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return board.score();
    }

    let mut best_value: Option<i32> = None;

    for index in 0..moves.len() {
        // SAFETY: unwrap is safe because `index` is within the legal-move range.
        let child = board.clone_and_play(index).unwrap();
        let value = search_value(&child, depth_left - 1, alpha, beta, prune, nodes);

        match player {
            Player::A => {
                if best_value.map_or(true, |best| value > best) {
                    best_value = Some(value);
                }
                if prune {
                    alpha = Some(alpha.map_or(value, |a| max(a, value)));
                    // beta cutoff: the minimizer above will never allow this branch
                    if beta.map_or(false, |b| value >= b) {
                        break;
                    }
                }
            }
            Player::B => {
                if best_value.map_or(true, |best| value < best) {
                    best_value = Some(value);
                }
                if prune {
                    beta = Some(beta.map_or(value, |b| min(b, value)));
                    // alpha cutoff: the maximizer above will never allow this branch
                    if alpha.map_or(false, |a| value <= a) {
                        break;
                    }
                }
            }
        }
    }

    // SAFETY: unwrap is safe because the move list is nonempty and the loop body always sets a
    // value before it can break.
    best_value.unwrap()
}
