use derive_more::{Display, Error};

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("theme '{theme}' has {available} symbols but the board needs {required} pairs")]
    InsufficientSymbols {
        theme: String,
        required: usize,
        available: usize,
    },
    #[display("grid size {side} must be a positive even number")]
    InvalidGridSize { side: u8 },
    #[display("theme '{theme}' lists '{symbol}' more than once")]
    DuplicateSymbol { theme: String, symbol: String },
    #[display("no game has been started yet")]
    NoActiveGame,
}

/// Why a click left the board untouched.
///
/// These are not failures: the caller is expected to ignore them, they only
/// say which rule swallowed the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum FlipRejected {
    #[display("no game is in progress")]
    Idle,
    #[display("board is locked while a mismatched pair settles")]
    Locked,
    #[display("every pair is already matched")]
    Finished,
    #[display("position {position} is outside the board")]
    OutOfBounds { position: usize },
    #[display("card {position} is already face up")]
    AlreadyFlipped { position: usize },
    #[display("card {position} is already matched")]
    AlreadyMatched { position: usize },
}
