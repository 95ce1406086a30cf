use std::fmt;

use crate::games::SessionRng;
use super::board::Grid;
use super::bot_controller::{BotError, best_move};
use super::types::{FirstPlayer, Mark, Move, Outcome, Side, WinningLine};
use super::win_detector::{check_win_with_line, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds,
    CellOccupied,
    Search(BotError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds => write!(f, "Position out of bounds"),
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
            MoveError::Search(e) => write!(f, "Search failed: {}", e),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<BotError> for MoveError {
    fn from(e: BotError) -> Self {
        MoveError::Search(e)
    }
}

/// Resolves who opens a game. `Ask` must be answered by the caller first,
/// so it is passed in as `asked`.
pub fn resolve_first_side(
    first_player: FirstPlayer,
    asked: Option<Side>,
    rng: &mut SessionRng,
) -> Side {
    match first_player {
        FirstPlayer::Human => Side::Human,
        FirstPlayer::Computer => Side::Computer,
        FirstPlayer::Random => {
            if rng.random_bool() {
                Side::Human
            } else {
                Side::Computer
            }
        }
        FirstPlayer::Ask => asked.unwrap_or(Side::Human),
    }
}

/// One game session. The outcome is never stored; it is recomputed from the
/// grid on every query.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    grid: Grid,
    current_side: Side,
}

impl TicTacToeGameState {
    pub fn new(first_side: Side) -> Self {
        Self {
            grid: Grid::new(),
            current_side: first_side,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn outcome(&self) -> Outcome {
        classify(&self.grid)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.grid)
    }

    pub fn place_mark(&mut self, side: Side, mv: Move) -> Result<(), MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        if side != self.current_side {
            return Err(MoveError::NotYourTurn);
        }

        if !mv.is_in_bounds() {
            return Err(MoveError::OutOfBounds);
        }

        if self.grid.get(mv) != Mark::Empty {
            return Err(MoveError::CellOccupied);
        }

        self.grid.set(mv, side.mark());

        if !self.outcome().is_over() {
            self.current_side = self.current_side.opponent();
        }

        Ok(())
    }

    pub fn play_computer_move(&mut self) -> Result<Move, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.current_side != Side::Computer {
            return Err(MoveError::NotYourTurn);
        }

        let mv = best_move(&self.grid)?;
        self.place_mark(Side::Computer, mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::get_available_moves;

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(Side::Human);
        state.place_mark(Side::Human, Move::new(1, 1)).unwrap();
        assert_eq!(state.current_side(), Side::Computer);
        let mv = state.play_computer_move().unwrap();
        assert_eq!(state.grid().get(mv), Mark::Computer);
        assert_eq!(state.current_side(), Side::Human);
    }

    #[test]
    fn test_rejects_move_out_of_turn() {
        let mut state = TicTacToeGameState::new(Side::Computer);
        assert_eq!(
            state.place_mark(Side::Human, Move::new(0, 0)),
            Err(MoveError::NotYourTurn)
        );
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds() {
        let mut state = TicTacToeGameState::new(Side::Human);
        state.place_mark(Side::Human, Move::new(0, 0)).unwrap();
        let taken = state.play_computer_move().unwrap();
        assert_eq!(
            state.place_mark(Side::Human, taken),
            Err(MoveError::CellOccupied)
        );
        assert_eq!(
            state.place_mark(Side::Human, Move::new(0, 3)),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_game_over_stops_play() {
        let mut state = TicTacToeGameState::new(Side::Computer);
        while !state.outcome().is_over() {
            if state.current_side() == Side::Computer {
                state.play_computer_move().unwrap();
            } else {
                let free = get_available_moves(state.grid())[0];
                state.place_mark(Side::Human, free).unwrap();
            }
        }
        assert_eq!(state.outcome(), Outcome::ComputerWins);
        assert_eq!(state.play_computer_move(), Err(MoveError::GameOver));
        assert_eq!(
            state.place_mark(state.current_side(), Move::new(0, 0)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_outcome_is_recomputed() {
        let mut state = TicTacToeGameState::new(Side::Computer);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        state.play_computer_move().unwrap();
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_resolve_first_side() {
        let mut rng = SessionRng::new(7);
        assert_eq!(resolve_first_side(FirstPlayer::Human, None, &mut rng), Side::Human);
        assert_eq!(
            resolve_first_side(FirstPlayer::Computer, None, &mut rng),
            Side::Computer
        );
        assert_eq!(
            resolve_first_side(FirstPlayer::Ask, Some(Side::Computer), &mut rng),
            Side::Computer
        );
    }

    #[test]
    fn test_random_first_side_is_reproducible_from_seed() {
        let first = resolve_first_side(FirstPlayer::Random, None, &mut SessionRng::new(42));
        let second = resolve_first_side(FirstPlayer::Random, None, &mut SessionRng::new(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_first_side_picks_both_sides() {
        let sides: Vec<Side> = (0..64)
            .map(|seed| resolve_first_side(FirstPlayer::Random, None, &mut SessionRng::new(seed)))
            .collect();
        assert!(sides.contains(&Side::Human));
        assert!(sides.contains(&Side::Computer));
    }
}
