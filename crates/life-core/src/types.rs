//! Core type definitions for the board and both game modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D board index pair (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Apply toroidal wrapping for an n-by-n board
    pub fn wrap(&self, n: i32) -> Self {
        Self {
            row: ((self.row % n) + n) % n,
            col: ((self.col % n) + n) % n,
        }
    }

    /// Map a pointer position in board pixel space to the cell under it.
    ///
    /// Pixel y grows upward while row 0 sits at the top, so
    /// `row = n - 1 - floor(y)` and `col = floor(x)`. Returns `None` when
    /// the pointer falls outside the board.
    pub fn from_pointer(x: f64, y: f64, n: i32) -> Option<Self> {
        if x < 0.0 || y < 0.0 || x >= n as f64 || y >= n as f64 {
            return None;
        }
        Some(Self {
            row: n - 1 - y.floor() as i32,
            col: x.floor() as i32,
        })
    }

    /// Inverse of [`Coord::from_pointer`] for a cell's corner sample point
    pub fn to_pointer(&self, n: i32) -> (f64, f64) {
        (self.col as f64, (n - 1 - self.row) as f64)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction to one of the 8 surrounding cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// (drow, dcol) offset for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

/// Cell state in the classic single-population game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// Cell state in the competitive two-player game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersusCell {
    #[default]
    Empty,
    P1,
    P2,
}

/// One of the two competing players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Species tag this player's cells carry on the board
    pub fn cell(&self) -> VersusCell {
        match self {
            Player::One => VersusCell::P1,
            Player::Two => VersusCell::P2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Decided result of a versus game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

/// Lifecycle phase of a versus game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    AwaitingPlacement,
    Running,
    Finished,
}
