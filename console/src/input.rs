use std::fmt;

use ttt_common::games::tictactoe::{Move, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Malformed,
    OutOfRange,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Invalid input. Please enter two numbers 1-3."),
            InputError::OutOfRange => write!(f, "Coordinates out of range. Use 1 to 3."),
        }
    }
}

impl std::error::Error for InputError {}

/// Parses a 1-based `row col` line into a 0-based move.
pub fn parse_move_line(line: &str) -> Result<Move, InputError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };

    let row: i64 = row.parse().map_err(|_| InputError::Malformed)?;
    let col: i64 = col.parse().map_err(|_| InputError::Malformed)?;

    let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
        return Err(InputError::OutOfRange);
    };
    Move::from_one_based(row, col).ok_or(InputError::OutOfRange)
}

/// `1` means the human moves first, `2` second.
pub fn parse_first_choice(line: &str) -> Option<Side> {
    match line.trim() {
        "1" => Some(Side::Human),
        "2" => Some(Side::Computer),
        _ => None,
    }
}

pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
