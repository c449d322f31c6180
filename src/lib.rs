//! A small and simple library for exhaustive minimax search with alpha-beta pruning.
//!
//! This library provides a generic implementation of the minimax algorithm for two-player,
//! zero-sum, turn-based games. The search explores the whole game tree, so the move it returns
//! is provably optimal; alpha-beta pruning only skips branches that cannot change the result.
//! A Tic-Tac-Toe board, interchangeable move sources, and a game loop are included.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::board::Board;
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::MinimaxSearch;
//!
//! // X to move can complete the top row
//! let mut board: TicTacToeBoard = "XX.OO....".parse().unwrap();
//!
//! // Create and configure a new search instance using the builder
//! let mut search = MinimaxSearch::builder()
//!     .with_alpha_beta_pruning(true)
//!     .build();
//!
//! let best_move = search.best_move(&mut board).unwrap();
//! assert_eq!(best_move, 2);
//!
//! // The board is left exactly as it was
//! assert_eq!(board.get_available_moves(), vec![2, 5, 6, 7, 8]);
//! println!("The best move is {best_move}, found in {:?}", search.get_stats());
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// Contains the error type shared by boards, movers, and the search.
pub mod error;
/// Contains the `Game` session that alternates two movers until the game ends.
pub mod game;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod minimax;
/// Contains the `Mover` trait and the human, random, and search-driven players.
pub mod movers;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Contains the `SearchStats` counters collected by a search.
pub mod search_stats;
