//! Memory-matching card game.
//!
//! The core is front-end agnostic: deal a [`game::Board`], drive it through a
//! [`session::Session`], and render whatever the session reports to its
//! observers. The GTK front-end lives in `ui` behind the `gui` feature.

pub mod confetti;
pub mod game;
pub mod records;
pub mod session;
pub mod settings;

#[cfg(feature = "gui")]
pub mod ui;

pub use game::{
    Board, Card, CardState, Difficulty, FlipOutcome, FlipRejected, Game, GameError, GridSize,
    SETTLE_DELAY, StarRating, Theme, ThemeKind, build_board,
};
pub use records::{FileStore, Leaderboard, MemoryStore, ScoreEntry, Store, StoreError};
pub use session::{
    EventLog, GameSummary, ManualTicker, Session, SessionEvent, SessionObserver, Ticker, WIN_DELAY,
};
pub use settings::Settings;
