//! Dummy game useful for debugging and testing search behavior.
//!
//! It is simply a tree of heuristic scores written down as a string: a leaf is an integer score,
//! a node is a parenthesized list of children. Players alternate starting from a configurable
//! first player, every child index is a legal move, and a leaf is terminal.
//!
//! # Example
//!
//! ```
//! use board_search::board::Board;
//! use board_search::games::dummy::DummyGame;
//!
//! let game: DummyGame = "(5 -2 5)".parse().unwrap();
//! assert_eq!(game.legal_moves(), vec![0, 1, 2]);
//! assert_eq!(game.score(), 0);
//!
//! let child = game.clone_and_play(1).unwrap();
//! assert_eq!(child.score(), -2);
//! assert!(child.is_terminal());
//! ```
use std::fmt;
use std::str::FromStr;

use nom::error::Error;
use nom::Finish;

use crate::board::{Board, InvalidMoveIndex, Player};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Tree {
    Leaf(i32),
    Node(Vec<Tree>),
}

mod parse {
    use nom::branch::alt;
    use nom::character::complete::{char, digit1, multispace0};
    use nom::combinator::{eof, map, map_res, opt, recognize};
    use nom::multi::many1;
    use nom::sequence::{delimited, pair, preceded, terminated};
    use nom::IResult;

    use super::Tree;

    fn leaf(input: &str) -> IResult<&str, Tree> {
        map(
            map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i32>),
            Tree::Leaf,
        )(input)
    }

    fn node(input: &str) -> IResult<&str, Tree> {
        preceded(
            multispace0,
            alt((
                leaf,
                map(
                    delimited(char('('), many1(node), preceded(multispace0, char(')'))),
                    Tree::Node,
                ),
            )),
        )(input)
    }

    pub(super) fn tree(input: &str) -> IResult<&str, Tree> {
        terminated(node, preceded(multispace0, eof))(input)
    }
}

impl FromStr for Tree {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::tree(s).finish() {
            Ok((_, tree)) => Ok(tree),
            Err(Error { input, code }) => Err(Error {
                input: input.to_string(),
                code,
            }),
        }
    }
}

/// A game built from an explicit score tree, see the [module docs](self).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DummyGame {
    state: Tree,
    player: Player,
}

impl FromStr for DummyGame {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DummyGame {
            state: s.parse()?,
            player: Player::A,
        })
    }
}

impl DummyGame {
    /// Change which player moves first; the default after parsing is [Player::A].
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }
}

impl Board for DummyGame {
    type Move = usize;

    fn next_player(&self) -> Option<Player> {
        match &self.state {
            Tree::Leaf(_) => None,
            Tree::Node(_) => Some(self.player),
        }
    }

    fn legal_moves(&self) -> Vec<usize> {
        match &self.state {
            Tree::Leaf(_) => vec![],
            Tree::Node(children) => (0..children.len()).collect(),
        }
    }

    fn play(&mut self, index: usize) -> Result<usize, InvalidMoveIndex> {
        let len = match &self.state {
            Tree::Leaf(_) => 0,
            Tree::Node(children) => children.len(),
        };
        if index >= len {
            return Err(InvalidMoveIndex { index, len });
        }

        let state = std::mem::replace(&mut self.state, Tree::Leaf(0));
        if let Tree::Node(mut children) = state {
            // the siblings are discarded, so the removal order doesn't matter
            self.state = children.swap_remove(index);
        }
        self.player = self.player.other();
        Ok(index)
    }

    fn score(&self) -> i32 {
        match &self.state {
            Tree::Leaf(value) => *value,
            // nothing is known about an inner position
            Tree::Node(_) => 0,
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(value) => write!(f, "{}", value),
            Tree::Node(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i != 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for DummyGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DummyGame({}, next {})", self.state, self.player.to_char())
    }
}
