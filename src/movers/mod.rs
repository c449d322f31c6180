//! Move sources that the game loop alternates between.

mod human;
mod random;
mod search;

pub use human::HumanMover;
pub use random::RandomMover;
pub use search::SearchMover;

use crate::board::{Board, Side};
use crate::error::GameError;

/// Something that can choose the next move for one side of the game.
pub trait Mover<T: Board> {
    /// Returns a legal move for `side` on `board`.
    ///
    /// The board may be changed while the move is chosen but must be restored before returning.
    fn get_move(&mut self, board: &mut T, side: Side) -> Result<T::Move, GameError>;
}

impl<T: Board, M: Mover<T> + ?Sized> Mover<T> for &mut M {
    fn get_move(&mut self, board: &mut T, side: Side) -> Result<T::Move, GameError> {
        (**self).get_move(board, side)
    }
}

impl<T: Board, M: Mover<T> + ?Sized> Mover<T> for Box<M> {
    fn get_move(&mut self, board: &mut T, side: Side) -> Result<T::Move, GameError> {
        (**self).get_move(board, side)
    }
}
