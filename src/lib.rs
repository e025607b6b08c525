#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A [Board](crate::board::Board) abstraction for deterministic two player games, pluggable
//! move-selection strategies on top of it, and a controller that runs a search on a background
//! thread while the caller keeps polling from its frame loop.
//!
//! # Features
//!
//! * The [Board](crate::board::Board) trait: legal moves in a stable, index-addressable order,
//!   all-or-nothing move application, a cheap heuristic score and deep-copy branching.
//! * Move-selection strategies, all implementing [Strategy](crate::ai::Strategy):
//!     * [RandomStrategy](crate::ai::simple::RandomStrategy), which picks a uniformly random move.
//!     * [GreedyStrategy](crate::ai::simple::GreedyStrategy), which looks a single ply ahead.
//!     * [MinimaxStrategy](crate::ai::minimax::MinimaxStrategy), classic depth-bounded minimax.
//!     * [AlphaBetaStrategy](crate::ai::minimax::AlphaBetaStrategy), minimax with alpha-beta
//!       pruning. Pruning changes performance, never the selected move.
//! * [SearchController](crate::ai::controller::SearchController), which runs one strategy at a
//!   time on a background thread and exposes completion, progress and the selected move through
//!   non-blocking polls. Worker panics are captured into the result instead of hanging the poll
//!   loop, and a running search can be cancelled.
//! * Example games: [TTTBoard](crate::games::ttt::TTTBoard) and the score-tree debug game
//!   [DummyGame](crate::games::dummy::DummyGame).
//! * Test utilities: random board generation in [board_gen](crate::util::board_gen) and a
//!   strategy-vs-strategy game runner in [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## Pick a move synchronously
//!
//! ```
//! use board_search::ai::{SearchHandle, Strategy};
//! use board_search::ai::simple::GreedyStrategy;
//! use board_search::board::Board;
//! use board_search::games::ttt::TTTBoard;
//!
//! let mut board = TTTBoard::default();
//! let index = GreedyStrategy.select_move(&board, 1, &SearchHandle::new()).unwrap();
//! board.play(index).unwrap();
//! println!("{}", board);
//! ```
//!
//! ## Search on a background thread, polling like a frame loop
//!
//! ```
//! use board_search::ai::controller::SearchController;
//! use board_search::ai::minimax::AlphaBetaStrategy;
//! use board_search::board::Board;
//! use board_search::games::ttt::TTTBoard;
//!
//! let mut board = TTTBoard::default();
//! let mut controller = SearchController::new();
//! controller.start_search(&board, 4, AlphaBetaStrategy).unwrap();
//!
//! while !controller.is_done() {
//!     // render, handle input, ...
//!     std::thread::sleep(std::time::Duration::from_millis(1));
//! }
//!
//! let index = controller.selected_move().unwrap();
//! board.play(index).unwrap();
//! ```

pub mod board;

pub mod ai;

pub mod games;

pub mod util;
