use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::{Store, StoreError};
use crate::game::StarRating;

pub const SCORES_KEY: &str = "memory-scores";
pub const LEADERBOARD_CAPACITY: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "time")]
    pub elapsed_seconds: u32,
    pub moves: u32,
    #[serde(rename = "stars")]
    pub star_rating: StarRating,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⏱️ {}s | 🎯 {} moves | {}",
            self.elapsed_seconds, self.moves, self.star_rating
        )
    }
}

/// The five fastest wins, fastest first.
///
/// Loaded from the store the first time it is read; anything unreadable there
/// counts as an empty board.
#[derive(Debug)]
pub struct Leaderboard<S: Store> {
    store: S,
    entries: Option<Vec<ScoreEntry>>,
}

impl<S: Store> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Leaderboard {
            store,
            entries: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn entries(&mut self) -> &[ScoreEntry] {
        self.loaded()
    }

    /// Forgets the cached list so the next read goes back to the store.
    pub fn reload(&mut self) {
        self.entries = None;
    }

    pub fn record(&mut self, entry: ScoreEntry) -> Vec<ScoreEntry> {
        let entries = self.loaded();
        entries.push(entry);
        entries.sort_by_key(|e| e.elapsed_seconds);
        entries.truncate(LEADERBOARD_CAPACITY);
        let top = entries.clone();
        if let Err(err) = self.persist(&top) {
            warn!("could not save leaderboard: {err}");
        }
        top
    }

    fn loaded(&mut self) -> &mut Vec<ScoreEntry> {
        let store = &self.store;
        self.entries.get_or_insert_with(|| load_entries(store))
    }

    fn persist(&mut self, entries: &[ScoreEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(SCORES_KEY, &raw)
    }
}

fn load_entries<S: Store>(store: &S) -> Vec<ScoreEntry> {
    let raw = match store.get(SCORES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("could not read leaderboard, starting empty: {err}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<ScoreEntry>>(&raw) {
        Ok(mut entries) => {
            entries.sort_by_key(|e| e.elapsed_seconds);
            entries.truncate(LEADERBOARD_CAPACITY);
            entries
        }
        Err(err) => {
            warn!("ignoring malformed leaderboard: {err}");
            Vec::new()
        }
    }
}
