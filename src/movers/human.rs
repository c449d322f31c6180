//! Human player reading cell numbers from a line-based input.

use super::Mover;
use crate::board::{Board, Side};
use crate::boards::tic_tac_toe::TicTacToeBoard;
use crate::error::GameError;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "\nInput a move on the board (0-8): ";
const RETRY: &str = "\nBad move. Try again...";

/// Human player that is prompted until a legal cell number is entered.
pub struct HumanMover<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanMover<R, W> {
    /// Creates a new human player reading moves from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        // bytes that are not UTF-8 become replacement characters and fail to parse as a move
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

/// Parses a cell number and checks that it is free on `board`.
pub(crate) fn parse_move(input: &str, board: &TicTacToeBoard) -> Result<usize, GameError> {
    let index: usize = input.parse().map_err(|_| GameError::Parse {
        input: input.to_string(),
    })?;
    if !board.get_available_moves().contains(&index) {
        return Err(GameError::IllegalMove { index });
    }
    Ok(index)
}

impl<R: BufRead, W: Write> Mover<TicTacToeBoard> for HumanMover<R, W> {
    fn get_move(&mut self, board: &mut TicTacToeBoard, side: Side) -> Result<usize, GameError> {
        loop {
            let line = self.read_line()?;
            match parse_move(&line, board) {
                Ok(index) => {
                    debug!(?side, index, "human move accepted");
                    return Ok(index);
                }
                Err(error) => {
                    debug!(?side, %error, "human move rejected");
                    writeln!(self.output, "{RETRY}")?;
                }
            }
        }
    }
}
