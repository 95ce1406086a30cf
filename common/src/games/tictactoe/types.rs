use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

/// Whose turn it is. Unlike [`Mark`] there is no empty variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Side::Human => Mark::Human,
            Side::Computer => Mark::Computer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        *self != Outcome::Ongoing
    }
}

/// A cell address on the grid, 0-based.
///
/// The console speaks 1-based coordinates; convert with
/// [`Move::from_one_based`] and [`Move::to_one_based`] at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        if (1..=GRID_SIZE).contains(&row) && (1..=GRID_SIZE).contains(&col) {
            Some(Self::new(row - 1, col - 1))
        } else {
            None
        }
    }

    pub fn to_one_based(&self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_one_based();
        write!(f, "{} {}", row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Move, end: Move) -> Self {
        Self { mark, start, end }
    }

    pub fn describe(&self) -> String {
        let (start_row, start_col) = self.start.to_one_based();
        let (end_row, end_col) = self.end.to_one_based();
        if self.start.row == self.end.row {
            format!("row {}", start_row)
        } else if self.start.col == self.end.col {
            format!("column {}", start_col)
        } else {
            format!(
                "diagonal {},{} to {},{}",
                start_row, start_col, end_row, end_col
            )
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
    #[default]
    Ask,
}

impl FromStr for FirstPlayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayer::Human),
            "computer" => Ok(FirstPlayer::Computer),
            "random" => Ok(FirstPlayer::Random),
            "ask" => Ok(FirstPlayer::Ask),
            other => Err(format!(
                "Unknown first player '{}', expected human, computer, random or ask",
                other
            )),
        }
    }
}
