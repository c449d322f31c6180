//! Player delegating every decision to the minimax search.

use super::Mover;
use crate::board::{Board, Side};
use crate::error::GameError;
use crate::minimax::MinimaxSearch;

/// Plays the optimal move found by an exhaustive search.
#[derive(Debug, Default, Clone)]
pub struct SearchMover {
    search: MinimaxSearch,
}

impl SearchMover {
    /// Creates a new search-driven player.
    pub fn new(search: MinimaxSearch) -> Self {
        Self { search }
    }

    /// Returns the search, including the counters of the last decision.
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl<T: Board> Mover<T> for SearchMover {
    fn get_move(&mut self, board: &mut T, side: Side) -> Result<T::Move, GameError> {
        self.search.best_move_for(board, side)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Side;
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::movers::{Mover, SearchMover};

    #[test]
    fn delegates_to_search() {
        let mut board: TicTacToeBoard = "XX.OO....".parse().unwrap();
        let mut mover = SearchMover::default();
        assert_eq!(mover.get_move(&mut board, Side::Max).unwrap(), 2);
        assert_eq!(mover.search().get_stats().nodes, 64);
    }

    #[test]
    fn plays_for_minimizer() {
        let mut board: TicTacToeBoard = "XX..O....".parse().unwrap();
        let mut mover = SearchMover::default();
        assert_eq!(mover.get_move(&mut board, Side::Min).unwrap(), 2);
    }
}
