//! Runs a [Strategy] on a background thread so a frame loop can keep polling.
//!
//! The controller moves through `Idle -> Running -> Done`. A search is started with
//! [SearchController::start_search], which snapshots the board and returns immediately; the
//! caller then polls [SearchController::is_done] once per frame and reads the selected move once
//! it returns true. Only one search per controller can be in flight at a time.
//!
//! The worker publishes its result once over a bounded channel and its progress through the
//! atomics in [SearchHandle], so the poller never blocks and never observes a torn value. A panic
//! inside the strategy is caught and published as part of the [SearchResult] instead of leaving
//! the poll loop hanging forever.
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use log::debug;
use thiserror::Error;

use crate::ai::{SearchHandle, Strategy};
use crate::board::Board;

/// Error returned by [SearchController::start_search].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("a search is already in progress on this controller")]
    AlreadyInProgress,
}

/// The outcome of a finished search.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// The selected move index, `None` if the board had no legal moves or the search was
    /// cancelled or panicked before finding one.
    pub selected: Option<usize>,

    /// Whether the search was cancelled before it ran to completion. A cancelled search still
    /// reports the best move it had found so far in `selected`, if any.
    pub cancelled: bool,

    /// The panic message if the strategy panicked, `None` for a normal finish.
    pub panic: Option<String>,
}

impl SearchResult {
    fn failed(message: String) -> Self {
        SearchResult {
            selected: None,
            cancelled: false,
            panic: Some(message),
        }
    }

    /// Whether the search finished normally, without cancellation or panic.
    pub fn is_clean(&self) -> bool {
        !self.cancelled && self.panic.is_none()
    }
}

#[derive(Debug)]
struct RunningSearch {
    handle: Arc<SearchHandle>,
    receiver: Receiver<SearchResult>,
}

/// Runs one search at a time on a background thread, exposing completion, progress and the
/// selected move through non-blocking polls.
#[derive(Debug, Default)]
pub struct SearchController {
    running: Option<RunningSearch>,
    result: Option<SearchResult>,
}

impl SearchController {
    pub fn new() -> Self {
        SearchController::default()
    }

    /// Start computing a move for `board`'s side to move on a background thread.
    ///
    /// The board is cloned, so the caller is free to keep using the original while the search
    /// runs. Returns immediately; fails with [SearchError::AlreadyInProgress] while a previous
    /// search on this controller is still running. A previous search that already finished is
    /// collected first, so starting from `Done` always succeeds and discards the old result.
    pub fn start_search<B: Board>(
        &mut self,
        board: &B,
        depth: u32,
        mut strategy: impl Strategy<B> + 'static,
    ) -> Result<(), SearchError> {
        self.poll();
        if self.running.is_some() {
            return Err(SearchError::AlreadyInProgress);
        }

        let board = board.clone();
        let handle = Arc::new(SearchHandle::new());
        let worker_handle = Arc::clone(&handle);
        let (sender, receiver) = bounded(1);

        debug!("starting background search, depth {}, strategy {:?}", depth, strategy);

        thread::spawn(move || {
            // the board is RefUnwindSafe by the Board bounds and the strategy is not reused
            // after a panic, so observing its broken state is impossible
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                strategy.select_move(&board, depth, &worker_handle)
            }));

            let result = match outcome {
                Ok(selected) => SearchResult {
                    selected,
                    cancelled: worker_handle.is_cancelled(),
                    panic: None,
                },
                Err(payload) => SearchResult::failed(panic_message(&*payload)),
            };

            worker_handle.report_progress(1.0);
            // the controller may have been dropped in the meantime, that's fine
            let _ = sender.send(result);
        });

        self.running = Some(RunningSearch { handle, receiver });
        self.result = None;
        Ok(())
    }

    /// Whether the current search has finished. Never blocks.
    pub fn is_done(&mut self) -> bool {
        self.poll();
        self.result.is_some()
    }

    /// The progress of the current search in `[0, 1]`: 0 while idle, 1 once done.
    pub fn progress(&self) -> f32 {
        match (&self.running, &self.result) {
            (Some(running), _) => running.handle.progress(),
            (None, Some(_)) => 1.0,
            (None, None) => 0.0,
        }
    }

    /// The move selected by the last finished search. `None` while no search has finished yet,
    /// and `None` for a finished search that found no move (terminal board).
    pub fn selected_move(&self) -> Option<usize> {
        self.result.as_ref().and_then(|result| result.selected)
    }

    /// The full result of the last finished search, `None` while no search has finished.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Ask the running search to stop early. It still finishes through the normal channel, with
    /// [SearchResult::cancelled] set. Does nothing while no search is running.
    pub fn cancel(&self) {
        if let Some(running) = &self.running {
            running.handle.cancel();
        }
    }

    fn poll(&mut self) {
        if let Some(running) = &self.running {
            match running.receiver.try_recv() {
                Ok(result) => {
                    debug!("background search finished: {:?}", result);
                    self.result = Some(result);
                    self.running = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    // the worker died without sending, which catch_unwind should prevent,
                    // still don't leave the caller polling forever
                    self.result = Some(SearchResult::failed(
                        "search worker disconnected without a result".to_string(),
                    ));
                    self.running = None;
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(&message) = payload.downcast_ref::<&'static str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
