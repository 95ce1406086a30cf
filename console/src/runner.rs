use std::io::{self, BufRead, Write};

use ttt_common::games::SessionRng;
use ttt_common::games::tictactoe::{
    FirstPlayer, Grid, MoveError, Outcome, Side, TicTacToeGameState, resolve_first_side,
};
use ttt_common::log;

use crate::config::Config;
use crate::input::{parse_first_choice, parse_move_line, parse_yes_no};
use crate::render::{Glyphs, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    InputClosed,
}

/// The console turn loop. Owns the one live game per session and talks to
/// the player through any reader/writer pair.
pub struct GameRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn new(input: R, output: W, config: Config, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            config,
            rng,
        }
    }

    fn glyphs(&self) -> Glyphs {
        Glyphs {
            human: self.config.human_glyph,
            computer: self.config.computer_glyph,
        }
    }

    /// Plays games until the player declines another one or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Tic-Tac-Toe: You ({}) vs AI ({})",
            self.config.human_glyph, self.config.computer_glyph
        )?;
        writeln!(
            self.output,
            "Enter moves as row and column numbers (1-3) separated by space.\n"
        )?;

        loop {
            match self.play_game()? {
                GameEnd::Finished(outcome) => log!("Game ended: {:?}", outcome),
                GameEnd::InputClosed => {
                    log!("Input closed");
                    return Ok(());
                }
            }

            if !self.config.play_again_prompt {
                return Ok(());
            }
            if !self.ask_play_again()? {
                return Ok(());
            }
        }
    }

    pub fn play_game(&mut self) -> io::Result<GameEnd> {
        self.print_board(&Grid::new())?;

        let Some(first_side) = self.choose_first_side()? else {
            return Ok(GameEnd::InputClosed);
        };
        let mut state = TicTacToeGameState::new(first_side);
        log!("{:?} moves first", first_side);

        loop {
            match state.current_side() {
                Side::Human => {
                    if !self.human_move(&mut state)? {
                        return Ok(GameEnd::InputClosed);
                    }
                }
                Side::Computer => {
                    let mv = state.play_computer_move().map_err(io::Error::other)?;
                    writeln!(self.output, "AI plays: {}", mv)?;
                }
            }

            self.print_board(state.grid())?;

            let outcome = state.outcome();
            if outcome.is_over() {
                self.announce(&state, outcome)?;
                return Ok(GameEnd::Finished(outcome));
            }
        }
    }

    fn choose_first_side(&mut self) -> io::Result<Option<Side>> {
        if self.config.first_player != FirstPlayer::Ask {
            log!("Resolving first player with seed {}", self.rng.seed());
            return Ok(Some(resolve_first_side(
                self.config.first_player,
                None,
                &mut self.rng,
            )));
        }

        self.prompt("Do you want to play first or second? (1 = first, 2 = second): ")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(side) = parse_first_choice(&line) {
                return Ok(Some(resolve_first_side(
                    self.config.first_player,
                    Some(side),
                    &mut self.rng,
                )));
            }
            self.prompt("Enter 1 (first) or 2 (second): ")?;
        }
    }

    /// Returns `false` when input ran out before a legal move was entered.
    fn human_move(&mut self, state: &mut TicTacToeGameState) -> io::Result<bool> {
        loop {
            self.prompt("Your move (row col): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let mv = match parse_move_line(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match state.place_mark(Side::Human, mv) {
                Ok(()) => return Ok(true),
                Err(MoveError::CellOccupied) => {
                    writeln!(self.output, "Cell already occupied. Pick another.")?;
                }
                Err(e) => return Err(io::Error::other(e)),
            }
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        self.prompt("Play again? (y/n): ")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(answer);
            }
            self.prompt("Please answer y or n: ")?;
        }
    }

    fn announce(&mut self, state: &TicTacToeGameState, outcome: Outcome) -> io::Result<()> {
        if let Some(line) = state.winning_line() {
            writeln!(self.output, "Three in a row on {}.", line.describe())?;
        }
        match outcome {
            Outcome::PlayerWins => writeln!(self.output, "You win! Congratulations 🎉"),
            Outcome::ComputerWins => writeln!(self.output, "AI wins. Better luck next time!"),
            Outcome::Draw => writeln!(self.output, "It's a draw."),
            Outcome::Ongoing => Ok(()),
        }
    }

    fn print_board(&mut self, grid: &Grid) -> io::Result<()> {
        let board = render_board(grid, &self.glyphs());
        write!(self.output, "{}", board)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
