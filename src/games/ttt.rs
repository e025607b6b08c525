use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::board::{Board, InvalidMoveIndex, Player};

/// A cell on the 3x3 grid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(usize);

/// Classic 3x3 tic-tac-toe.
///
/// Legal moves are the empty cells in row-major order. The heuristic counts lines still open for
/// each player, weighted by how many own stones they already contain, and saturates at
/// [TTTBoard::WIN_SCORE] for a decided game. That keeps every score far inside the `i32` range
/// the search needs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TTTBoard {
    tiles: [Option<Player>; 9],
    next_player: Player,
    winner: Option<Player>,
}

const LINES: &[[usize; 3]] = &[
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl Default for TTTBoard {
    fn default() -> Self {
        TTTBoard {
            tiles: Default::default(),
            next_player: Player::A,
            winner: None,
        }
    }
}

impl Coord {
    pub fn from_xy(x: usize, y: usize) -> Self {
        assert!(x < 3);
        assert!(y < 3);
        Coord(y * 3 + x)
    }

    pub fn from_i(i: usize) -> Self {
        assert!(i < 9);
        Coord(i)
    }

    pub fn i(self) -> usize {
        self.0
    }

    pub fn x(self) -> usize {
        self.0 % 3
    }

    pub fn y(self) -> usize {
        self.0 / 3
    }
}

impl TTTBoard {
    /// Score of a board won by [Player::A]; a board won by [Player::B] scores the negation.
    pub const WIN_SCORE: i32 = 100;

    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.0]
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn line_score(&self, line: &[usize; 3]) -> i32 {
        let mut count_a = 0;
        let mut count_b = 0;
        for &i in line {
            match self.tiles[i] {
                Some(Player::A) => count_a += 1,
                Some(Player::B) => count_b += 1,
                None => {}
            }
        }

        // a contested line is worthless for both sides
        match (count_a, count_b) {
            (0, 0) => 0,
            (a, 0) => a * a,
            (0, b) => -(b * b),
            (_, _) => 0,
        }
    }
}

impl Board for TTTBoard {
    type Move = Coord;

    fn next_player(&self) -> Option<Player> {
        if self.winner.is_some() || self.tiles.iter().all(|tile| tile.is_some()) {
            None
        } else {
            Some(self.next_player)
        }
    }

    fn legal_moves(&self) -> Vec<Coord> {
        if self.winner.is_some() {
            return vec![];
        }
        (0..9)
            .filter(|&i| self.tiles[i].is_none())
            .map(Coord)
            .collect()
    }

    fn play(&mut self, index: usize) -> Result<Coord, InvalidMoveIndex> {
        let moves = self.legal_moves();
        let mv = *moves.get(index).ok_or(InvalidMoveIndex {
            index,
            len: moves.len(),
        })?;

        self.tiles[mv.0] = Some(self.next_player);

        let won = LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.tiles[i] == Some(self.next_player)));
        if won {
            self.winner = Some(self.next_player);
        }

        self.next_player = self.next_player.other();
        Ok(mv)
    }

    fn score(&self) -> i32 {
        match self.winner {
            Some(player) => player.sign::<i32>(Player::A) * Self::WIN_SCORE,
            None => LINES.iter().map(|line| self.line_score(line)).sum(),
        }
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.x(), self.y())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Display for TTTBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(3) {
            let line = row
                .iter()
                .map(|tile| tile.map_or('.', Player::to_char))
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
