mod deck;
mod error;
mod machine;
mod state;
mod theme;

pub use deck::build_board;
pub use error::{FlipRejected, GameError};
pub use machine::{FlipOutcome, Game, SETTLE_DELAY};
pub use state::{Board, Card, CardState, Difficulty, GridSize, StarRating, Symbol};
pub use theme::{Theme, ThemeKind};
