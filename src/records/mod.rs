mod leaderboard;
mod store;

pub use leaderboard::{LEADERBOARD_CAPACITY, Leaderboard, SCORES_KEY, ScoreEntry};
pub use store::{FileStore, MemoryStore, Store, StoreError};
