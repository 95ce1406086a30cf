use std::fmt;

use crate::log;
use super::board::{Grid, get_available_moves, moves_remaining};
use super::types::{Mark, Move};
use super::win_detector::{WIN_SCORE, score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    NoMovesRemaining,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::NoMovesRemaining => write!(f, "No empty cell left to move to"),
        }
    }
}

impl std::error::Error for BotError {}

/// Picks the computer's move by searching the full game tree.
///
/// Candidates are tried in row-major order and the first one with the
/// strictly greatest value wins, so the choice is reproducible. The caller's
/// grid is never touched; the search runs on a scratch copy.
pub fn best_move(grid: &Grid) -> Result<Move, BotError> {
    let mut board = *grid;
    let mut best: Option<(Move, i32)> = None;

    for mv in get_available_moves(&board) {
        board.set(mv, Mark::Computer);
        let value = minimax(&mut board, 0, false);
        board.set(mv, Mark::Empty);

        log!("Candidate {} scored {}", mv, value);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }

    let (mv, value) = best.ok_or(BotError::NoMovesRemaining)?;
    log!("Computer picks {} with value {}", mv, value);
    Ok(mv)
}

/// Minimax value of `board` from the computer's point of view.
///
/// Wins found sooner score higher and losses found later score higher, by
/// offsetting the terminal score with `depth`. Every hypothetical mark is
/// reverted before returning.
pub fn minimax(board: &mut Grid, depth: usize, is_maximizing: bool) -> i32 {
    let terminal = score(board);
    if terminal == WIN_SCORE {
        return WIN_SCORE - depth as i32;
    }
    if terminal == -WIN_SCORE {
        return -WIN_SCORE + depth as i32;
    }
    if !moves_remaining(board) {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            board.set(mv, Mark::Computer);
            let eval = minimax(board, depth + 1, false);
            board.set(mv, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            board.set(mv, Mark::Human);
            let eval = minimax(board, depth + 1, true);
            board.set(mv, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
