use crate::board::{AppliedMove, Board, Side};
use crate::error::GameError;
use crate::search_stats::SearchStats;
use tracing::{debug, instrument};

/// A score beyond every utility, used as the initial bound of the search window.
pub const INFINITY: i32 = i32::MAX;

/// Exhaustive minimax search with optional alpha-beta pruning.
///
/// The search works on the caller's board in place: every hypothetical move is applied through
/// an [`AppliedMove`] guard and taken back before the next sibling is tried, so the board is
/// unchanged once a search returns, whether it succeeds or fails.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    use_alpha_beta_pruning: bool,
    stats: SearchStats,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        MinimaxSearchBuilder::new().build()
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder {
    use_alpha_beta_pruning: bool,
}

impl Default for MinimaxSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxSearchBuilder {
    /// Creates a new builder with alpha-beta pruning enabled.
    pub fn new() -> Self {
        Self {
            use_alpha_beta_pruning: true,
        }
    }

    /// Enables or disables alpha-beta pruning. The chosen moves are the same either way.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Builds the `MinimaxSearch` instance with the configured parameters.
    pub fn build(self) -> MinimaxSearch {
        MinimaxSearch::new(self.use_alpha_beta_pruning)
    }
}

impl MinimaxSearch {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder() -> MinimaxSearchBuilder {
        MinimaxSearchBuilder::new()
    }

    /// Creates a new `MinimaxSearch` instance.
    ///
    /// It is recommended to use the builder pattern via `MinimaxSearch::builder()` instead.
    pub fn new(use_alpha_beta_pruning: bool) -> Self {
        Self {
            use_alpha_beta_pruning,
            stats: SearchStats::default(),
        }
    }

    /// Returns `true` when branches that cannot change the result are skipped.
    pub fn uses_alpha_beta_pruning(&self) -> bool {
        self.use_alpha_beta_pruning
    }

    /// Returns the counters of the most recent search.
    pub fn get_stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the optimal move for the maximizing side.
    ///
    /// Must only be called when the maximizer is to move. Boards that report their side to move
    /// through [`Board::get_side_to_move`] have this checked in debug builds.
    ///
    /// Fails with [`GameError::NoLegalMove`] when the game is already decided or the board is full.
    pub fn best_move<T: Board>(&mut self, board: &mut T) -> Result<T::Move, GameError> {
        self.best_move_for(board, Side::Max)
    }

    /// Returns the optimal move for `side`.
    ///
    /// Moves are tried in the order of [`Board::get_available_moves`]; a later move replaces the
    /// current best only when it is strictly better, so the first of equally scored moves wins.
    #[instrument(skip(self, board))]
    pub fn best_move_for<T: Board>(
        &mut self,
        board: &mut T,
        side: Side,
    ) -> Result<T::Move, GameError> {
        self.stats = SearchStats::default();
        if board.get_outcome().is_terminal() {
            return Err(GameError::NoLegalMove);
        }
        debug_assert!(
            board.get_side_to_move().is_none_or(|to_move| to_move == side),
            "searching for {side:?} out of turn"
        );

        let mut best: Option<(T::Move, i32)> = None;
        for b_move in board.get_available_moves() {
            let score = self.score_move(board, b_move, side, -INFINITY, INFINITY)?;
            let improves = match best {
                None => true,
                Some((_, best_score)) => match side {
                    Side::Max => score > best_score,
                    Side::Min => score < best_score,
                },
            };
            if improves {
                best = Some((b_move, score));
            }
        }

        let (b_move, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!(?b_move, score, stats = ?self.stats, "search finished");
        Ok(b_move)
    }

    /// Applies `b_move` for `side` and scores the position by letting the opponent reply.
    fn score_move<T: Board>(
        &mut self,
        board: &mut T,
        b_move: T::Move,
        side: Side,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, GameError> {
        let mut applied = AppliedMove::new(board, b_move, side)?;
        match side {
            Side::Max => self.minimize(&mut *applied, alpha, beta),
            Side::Min => self.maximize(&mut *applied, alpha, beta),
        }
    }

    fn maximize<T: Board>(
        &mut self,
        board: &mut T,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, GameError> {
        self.stats.nodes += 1;
        if let Some(utility) = board.get_outcome().utility() {
            self.stats.leaves += 1;
            return Ok(utility);
        }

        let mut best = -INFINITY;
        for b_move in board.get_available_moves() {
            let score = self.score_move(board, b_move, Side::Max, alpha, beta)?;
            best = best.max(score);
            alpha = alpha.max(best);
            if self.use_alpha_beta_pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                return Ok(alpha);
            }
        }
        Ok(best)
    }

    fn minimize<T: Board>(
        &mut self,
        board: &mut T,
        alpha: i32,
        mut beta: i32,
    ) -> Result<i32, GameError> {
        self.stats.nodes += 1;
        if let Some(utility) = board.get_outcome().utility() {
            self.stats.leaves += 1;
            return Ok(utility);
        }

        let mut best = INFINITY;
        for b_move in board.get_available_moves() {
            let score = self.score_move(board, b_move, Side::Min, alpha, beta)?;
            best = best.min(score);
            beta = beta.min(best);
            if self.use_alpha_beta_pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                return Ok(beta);
            }
        }
        Ok(best)
    }
}
