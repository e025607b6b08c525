use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::board::Board;

pub mod controller;
pub mod minimax;
pub mod simple;

/// A move-selection policy over a [Board] and a depth budget.
///
/// `select_move` returns the index of the chosen move into [Board::legal_moves], or `None` when
/// the board has no legal moves. `None` is a terminal-state signal, not an error.
///
/// `self` is mutable to allow for random state, this method is not supposed to
/// modify `self` in any other significant way.
pub trait Strategy<B: Board>: Debug + Send {
    fn select_move(&mut self, board: &B, depth: u32, handle: &SearchHandle) -> Option<usize>;
}

/// State shared between a running search and whoever started it: a fractional progress estimate
/// and a cancellation flag.
///
/// Recursive strategies report progress only at the root of the search tree, as the fraction of
/// root branches explored, and observe cancellation between root branches. Both fields are
/// atomics so the poller never sees a torn value.
#[derive(Debug, Default)]
pub struct SearchHandle {
    // f32 bits, always a value in [0, 1]
    progress: AtomicU32,
    cancelled: AtomicBool,
}

impl SearchHandle {
    pub fn new() -> Self {
        SearchHandle::default()
    }

    /// The most recently reported progress, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        f32::from_bits(self.progress.load(Ordering::Relaxed))
    }

    /// Record a new progress estimate. Values outside `[0, 1]` are clamped.
    pub fn report_progress(&self, fraction: f32) {
        let clamped = fraction.max(0.0).min(1.0);
        self.progress.store(clamped.to_bits(), Ordering::Relaxed);
    }

    /// Ask the running search to stop early. The search finishes with whatever it has found so
    /// far; a search that already completed is unaffected.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
