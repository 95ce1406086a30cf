mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Grid, get_available_moves, moves_remaining};
pub use bot_controller::{BotError, best_move, minimax};
pub use game_state::{MoveError, TicTacToeGameState, resolve_first_side};
pub use types::{FirstPlayer, GRID_SIZE, Mark, Move, Outcome, Side, WinningLine};
pub use win_detector::{WIN_SCORE, check_win, check_win_with_line, classify, score};
