use crate::error::GameError;
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// The central trait of the library, defining the interface for a game state.
///
/// To run the minimax search on a custom game, this trait must be implemented.
/// The search mutates the board in place and relies on `undo_move` restoring
/// exactly the state that `perform_move` changed.
pub trait Board {
    /// The type representing a move in the game. This could be a simple `usize` for a board position
    /// or a more complex struct for games with intricate actions.
    type Move: Copy + Debug;

    /// Returns every legal move, in a fixed ascending order.
    ///
    /// The order decides tie-breaking between equally scored moves.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Returns the side that has completed a winning line, if any.
    fn get_winner(&self) -> Option<Side>;

    /// Places `side`'s mark for the given move.
    ///
    /// Fails with [`GameError::IllegalMove`] when the move is not available.
    fn perform_move(&mut self, b_move: Self::Move, side: Side) -> Result<(), GameError>;

    /// Takes back a move previously applied with [`Board::perform_move`].
    fn undo_move(&mut self, b_move: Self::Move);

    /// Returns the side expected to move next, for boards that can tell from their state.
    fn get_side_to_move(&self) -> Option<Side> {
        None
    }

    /// Returns `true` when nobody has won and no move is left.
    fn is_draw(&self) -> bool {
        self.get_winner().is_none() && self.get_available_moves().is_empty()
    }

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome {
        match self.get_winner() {
            Some(Side::Max) => GameOutcome::MaxWins,
            Some(Side::Min) => GameOutcome::MinWins,
            None if self.is_draw() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress = 0,
    /// The maximizing side has completed a line.
    MaxWins = 1,
    /// The minimizing side has completed a line.
    MinWins = 2,
    /// The board is full and nobody has won.
    Draw = 3,
}

impl GameOutcome {
    /// Returns `true` for every outcome except [`GameOutcome::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Maps a finished game to its utility for the maximizer.
    ///
    /// `+1` for a maximizer win, `-1` for a minimizer win, `0` for a draw.
    /// An unfinished game has no utility.
    pub fn utility(self) -> Option<i32> {
        match self {
            GameOutcome::MaxWins => Some(1),
            GameOutcome::MinWins => Some(-1),
            GameOutcome::Draw => Some(0),
            GameOutcome::InProgress => None,
        }
    }
}

/// Represents the two sides of a zero-sum game from the perspective of the search.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Side {
    /// The side whose utility is maximized. Moves first.
    Max = 1,
    /// The opposing side, minimizing the same utility.
    Min = 2,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A move applied to a borrowed board, taken back when the guard is dropped.
///
/// The guard dereferences to the board, so the search can recurse through it
/// while the move is in place.
pub struct AppliedMove<'a, T: Board> {
    board: &'a mut T,
    b_move: T::Move,
}

impl<'a, T: Board> AppliedMove<'a, T> {
    /// Applies `b_move` for `side`. Nothing is changed if the move is rejected.
    pub fn new(board: &'a mut T, b_move: T::Move, side: Side) -> Result<Self, GameError> {
        board.perform_move(b_move, side)?;
        Ok(Self { board, b_move })
    }
}

impl<T: Board> Deref for AppliedMove<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.board
    }
}

impl<T: Board> DerefMut for AppliedMove<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.board
    }
}

impl<T: Board> Drop for AppliedMove<'_, T> {
    fn drop(&mut self) {
        self.board.undo_move(self.b_move);
    }
}
