use crate::board::{Board, GameOutcome, Side};
use crate::error::GameError;
use crate::movers::Mover;
use tracing::{debug, info, instrument};

/// A single applied move and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn<M> {
    /// The side that moved.
    pub side: Side,
    /// The move that was applied.
    pub b_move: M,
    /// The outcome of the game right after the move.
    pub outcome: GameOutcome,
}

/// One game session: the board and a mover for each side.
///
/// `Side::Max` moves first. The session only reports outcomes; deciding what to do once the
/// game is over is left to the caller.
pub struct Game<T: Board, A: Mover<T>, B: Mover<T>> {
    board: T,
    max_mover: A,
    min_mover: B,
    to_move: Side,
    history: Vec<T::Move>,
}

impl<T: Board, A: Mover<T>, B: Mover<T>> Game<T, A, B> {
    /// Creates a new session starting from `board` with the maximizer to move.
    pub fn new(board: T, max_mover: A, min_mover: B) -> Self {
        Self {
            board,
            max_mover,
            min_mover,
            to_move: Side::Max,
            history: Vec::new(),
        }
    }

    /// Returns the board in its current state.
    pub fn board(&self) -> &T {
        &self.board
    }

    /// Returns the side whose mover will be asked next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the moves applied so far, in order.
    pub fn history(&self) -> &[T::Move] {
        &self.history
    }

    /// Returns the outcome of the game so far.
    pub fn outcome(&self) -> GameOutcome {
        self.board.get_outcome()
    }

    /// Asks the current side's mover for a move, applies it, and passes the turn.
    ///
    /// Fails with [`GameError::NoLegalMove`] if the game is already over.
    pub fn play_turn(&mut self) -> Result<Turn<T::Move>, GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let side = self.to_move;
        let b_move = match side {
            Side::Max => self.max_mover.get_move(&mut self.board, side)?,
            Side::Min => self.min_mover.get_move(&mut self.board, side)?,
        };
        self.board.perform_move(b_move, side)?;
        self.history.push(b_move);

        let outcome = self.outcome();
        debug!(?side, ?b_move, ?outcome, "move applied");
        if !outcome.is_terminal() {
            self.to_move = side.opponent();
        }

        Ok(Turn {
            side,
            b_move,
            outcome,
        })
    }

    /// Plays until somebody wins or the board is full, calling `on_turn` after every move.
    ///
    /// An error returned by `on_turn` stops the game and is passed on.
    #[instrument(skip_all)]
    pub fn play<F>(&mut self, mut on_turn: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&Turn<T::Move>, &T) -> Result<(), GameError>,
    {
        info!("game started");
        while !self.outcome().is_terminal() {
            let turn = self.play_turn()?;
            on_turn(&turn, &self.board)?;
        }

        let outcome = self.outcome();
        info!(?outcome, moves = self.history.len(), "game finished");
        Ok(outcome)
    }

    /// Plays the game to the end without observing individual turns.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        self.play(|_, _| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome, Side};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::error::GameError;
    use crate::game::Game;
    use crate::movers::{HumanMover, RandomMover, SearchMover};
    use crate::random::CustomNumberGenerator;
    use std::io::Cursor;

    #[test]
    fn search_self_play_is_a_draw() {
        // arrange
        let mut game = Game::new(
            TicTacToeBoard::default(),
            SearchMover::default(),
            SearchMover::default(),
        );

        // act
        let outcome = game.run().unwrap();

        // assert
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(game.history(), &[0, 4, 1, 2, 6, 3, 5, 7, 8]);
        assert!(game.board().get_available_moves().is_empty());
    }

    #[test]
    fn turns_alternate_and_stop_at_the_end() {
        // arrange
        let mut game = Game::new(
            TicTacToeBoard::default(),
            SearchMover::default(),
            RandomMover::new(CustomNumberGenerator::new(11)),
        );
        let mut sides = Vec::new();

        // act
        let outcome = game
            .play(|turn, _| {
                sides.push(turn.side);
                Ok(())
            })
            .unwrap();

        // assert
        assert!(outcome.is_terminal());
        for (i, side) in sides.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Max } else { Side::Min };
            assert_eq!(*side, expected);
        }
        assert_eq!(sides.len(), game.history().len());
        assert_eq!(game.board().moves_played(), game.history().len());
        assert!(matches!(game.play_turn(), Err(GameError::NoLegalMove)));
    }

    #[test]
    fn human_loses_to_search() {
        // arrange
        // the human keeps playing the left column while the engine completes the top row
        let human = HumanMover::new(Cursor::new("3\n6\n"), Vec::new());
        let mut game = Game::new(TicTacToeBoard::default(), SearchMover::default(), human);

        // act
        let outcome = game.run().unwrap();

        // assert
        assert_eq!(outcome, GameOutcome::MaxWins);
        assert_eq!(game.board().get_winner(), Some(Side::Max));
        assert_eq!(game.to_move(), Side::Max);
    }

    #[test]
    fn observer_error_stops_the_game() {
        // arrange
        let mut game = Game::new(
            TicTacToeBoard::default(),
            SearchMover::default(),
            SearchMover::default(),
        );

        // act
        let result = game.play(|_, _| Err(GameError::InputClosed));

        // assert
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(game.history(), &[0]);
    }

    #[test]
    fn turn_reports_outcome() {
        let board: TicTacToeBoard = "XX.OO....".parse().unwrap();
        let mut game = Game::new(board, SearchMover::default(), SearchMover::default());
        let turn = game.play_turn().unwrap();
        assert_eq!(turn.side, Side::Max);
        assert_eq!(turn.b_move, 2);
        assert_eq!(turn.outcome, GameOutcome::MaxWins);
    }
}
