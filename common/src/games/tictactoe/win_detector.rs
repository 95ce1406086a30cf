use super::board::{Grid, moves_remaining};
use super::types::{Mark, Move, Outcome, WinningLine};

pub const WIN_SCORE: i32 = 10;

// Rows, then columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(grid: &Grid) -> Option<Mark> {
    check_win_with_line(grid).map(|line| line.mark)
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let (a, b, c) = (Move::new(a.0, a.1), Move::new(b.0, b.1), Move::new(c.0, c.1));
        let mark = grid.get(a);
        if mark != Mark::Empty && mark == grid.get(b) && mark == grid.get(c) {
            return Some(WinningLine::new(mark, a, c));
        }
    }
    None
}

/// `+10` when the computer owns a full line, `-10` for the human, `0` otherwise.
pub fn score(grid: &Grid) -> i32 {
    match check_win(grid) {
        Some(Mark::Computer) => WIN_SCORE,
        Some(Mark::Human) => -WIN_SCORE,
        _ => 0,
    }
}

pub fn classify(grid: &Grid) -> Outcome {
    match score(grid) {
        s if s == -WIN_SCORE => Outcome::PlayerWins,
        s if s == WIN_SCORE => Outcome::ComputerWins,
        _ if moves_remaining(grid) => Outcome::Ongoing,
        _ => Outcome::Draw,
    }
}
