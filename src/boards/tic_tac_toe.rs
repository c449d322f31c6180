use crate::board::{Board, Side};
use crate::error::GameError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

const SIZE: usize = 9;

/// Winning lines in the order they are checked: rows top to bottom, columns left to right,
/// then the two diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array laid out row-major, where each element
/// corresponds to a cell. A move is represented by a `usize` from 0 to 8.
/// `Side::Max` plays `X` and `Side::Min` plays `O`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TicTacToeBoard {
    field: [Option<Side>; SIZE],
}

impl TicTacToeBoard {
    /// Creates a board from its cells.
    pub fn from_cells(field: [Option<Side>; SIZE]) -> Self {
        Self { field }
    }

    /// Returns the nine cells, row-major.
    pub fn cells(&self) -> &[Option<Side>; SIZE] {
        &self.field
    }

    /// Returns the mark in a single cell, or `None` when it is empty or out of range.
    pub fn cell(&self, index: usize) -> Option<Side> {
        self.field.get(index).copied().flatten()
    }

    /// Returns the number of marks placed so far.
    pub fn moves_played(&self) -> usize {
        self.field.iter().filter(|x| x.is_some()).count()
    }

    /// Returns the side expected to move next, assuming `Side::Max` opened the game.
    pub fn side_to_move(&self) -> Side {
        let max_marks = self.field.iter().filter(|&&x| x == Some(Side::Max)).count();
        let min_marks = self.field.iter().filter(|&&x| x == Some(Side::Min)).count();
        if max_marks > min_marks {
            Side::Min
        } else {
            Side::Max
        }
    }

    /// Renders the cell numbering used for input, one row per line.
    pub fn numbered_reference() -> String {
        (0..3)
            .map(|row| {
                let cells: Vec<String> = (row * 3..(row + 1) * 3).map(|i| i.to_string()).collect();
                format!("| {} |\n", cells.join(" | "))
            })
            .collect()
    }
}

impl Board for TicTacToeBoard {
    type Move = usize;

    fn get_available_moves(&self) -> Vec<Self::Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    fn get_winner(&self) -> Option<Side> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.field[a]?;
            (self.field[b] == Some(mark) && self.field[c] == Some(mark)).then_some(mark)
        })
    }

    fn get_side_to_move(&self) -> Option<Side> {
        Some(self.side_to_move())
    }

    fn perform_move(&mut self, b_move: Self::Move, side: Side) -> Result<(), GameError> {
        match self.field.get_mut(b_move) {
            Some(cell) if cell.is_none() => {
                *cell = Some(side);
                Ok(())
            }
            _ => Err(GameError::IllegalMove { index: b_move }),
        }
    }

    fn undo_move(&mut self, b_move: Self::Move) {
        if let Some(cell) = self.field.get_mut(b_move) {
            *cell = None;
        }
    }
}

impl Display for TicTacToeBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.field.chunks(3) {
            let marks: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Side::Max) => "X",
                    Some(Side::Min) => "O",
                    None => " ",
                })
                .collect();
            writeln!(f, "| {} |", marks.join(" | "))?;
        }
        Ok(())
    }
}

impl FromStr for TicTacToeBoard {
    type Err = GameError;

    /// Parses nine cells written as `X`, `O`, or one of `.`, `_`, space for an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SIZE {
            return Err(GameError::Parse { input: s.to_string() });
        }

        let mut field = [None; SIZE];
        for (cell, ch) in field.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Some(Side::Max),
                'O' | 'o' => Some(Side::Min),
                '.' | '_' | ' ' => None,
                _ => return Err(GameError::Parse { input: s.to_string() }),
            };
        }
        Ok(Self { field })
    }
}
