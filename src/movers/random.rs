//! Player picking uniformly among the legal moves.

use super::Mover;
use crate::board::{Board, Side};
use crate::error::GameError;
use crate::random::RandomGenerator;
use tracing::debug;

/// Plays a uniformly random legal move.
pub struct RandomMover<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomMover<K> {
    /// Creates a new random player drawing from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<T: Board, K: RandomGenerator> Mover<T> for RandomMover<K> {
    fn get_move(&mut self, board: &mut T, side: Side) -> Result<T::Move, GameError> {
        let moves = board.get_available_moves();
        let b_move = *self.random.choose(&moves).ok_or(GameError::NoLegalMove)?;
        debug!(?side, ?b_move, "random move chosen");
        Ok(b_move)
    }
}
