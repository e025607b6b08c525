use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::panic::{RefUnwindSafe, UnwindSafe};

use rand::Rng;
use thiserror::Error;

/// One of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// Error returned when a move index is outside the current legal-move range.
///
/// Applying an invalid index is all-or-nothing: the board is left untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("move index {index} out of range, board has {len} legal moves")]
pub struct InvalidMoveIndex {
    pub index: usize,
    pub len: usize,
}

/// The main trait of this crate. Represents the state of a two-player game.
/// Each game implementation is supposed to provide its own constructors to allow for customizable start positions.
///
/// Moves are addressed by their index into [Board::legal_moves], so the enumeration order is part
/// of the contract: it must be deterministic for a given state, and implementations must re-derive
/// it after every mutation instead of caching it across calls to [Board::play].
///
/// `Clone` must be an independent deep copy: playing a move on a clone never affects the original.
/// The search branches by cloning, so implementations must own all of their state.
pub trait Board:
    'static + Debug + Display + Clone + Eq + Hash + Send + Sync + UnwindSafe + RefUnwindSafe
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Copy + Eq + Send + Sync;

    /// The next player to make a move, or `None` once the game is over.
    fn next_player(&self) -> Option<Player>;

    /// The currently legal moves, in a stable order. An empty sequence means this board is
    /// terminal for the side to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play the move at `index` into [Board::legal_moves], modifying this board and advancing the
    /// side to move. Returns the move that was played.
    ///
    /// Fails with [InvalidMoveIndex] without modifying the board if `index` is out of range.
    fn play(&mut self, index: usize) -> Result<Self::Move, InvalidMoveIndex>;

    /// A cheap heuristic evaluation of this board. Positive values favor [Player::A], negative
    /// values favor [Player::B]. Called at every leaf of a search tree, so this should be fast.
    fn score(&self) -> i32;

    /// The heuristic score from the point of view of `player`: higher is better for them.
    fn score_for(&self, player: Player) -> i32 {
        player.sign::<i32>(Player::A) * self.score()
    }

    /// Clone this board, play the move at `index` on the clone and return it.
    fn clone_and_play(&self, index: usize) -> Result<Self, InvalidMoveIndex> {
        let mut next = self.clone();
        next.play(index)?;
        Ok(next)
    }

    /// Whether the side to move has no legal moves left.
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Pick a uniformly random index into [Board::legal_moves], or `None` if there are none.
    /// Can be overridden for better performance.
    fn random_move_index(&self, rng: &mut impl Rng) -> Option<usize> {
        let count = self.legal_moves().len();
        if count == 0 {
            None
        } else {
            Some(rng.gen_range(0..count))
        }
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}
