use derive_more::{Display, Error, From};

/// Errors produced while applying moves, searching, or reading human input.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// The input could not be parsed as a move.
    #[display("'{input}' is not a move")]
    Parse {
        /// The offending input, trimmed.
        input: String,
    },
    /// The move targets a non-empty or out-of-range cell.
    #[display("cell {index} is not available")]
    IllegalMove {
        /// The requested cell index.
        index: usize,
    },
    /// A search was requested on a board that is already finished or full.
    #[display("no legal move is available")]
    NoLegalMove,
    /// The input stream ended before a legal move was read.
    #[display("input closed before a move was entered")]
    InputClosed,
    /// Reading input or writing a prompt failed.
    #[from]
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
}
