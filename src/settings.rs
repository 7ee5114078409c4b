use log::warn;
use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, ThemeKind};
use crate::records::{Store, StoreError};

pub const SETTINGS_KEY: &str = "memory-settings";

/// Choices the player makes on the start screen, kept between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub theme: ThemeKind,
    pub dark_mode: bool,
    pub music: bool,
}

impl Settings {
    /// Reads the saved settings, falling back to defaults for anything
    /// missing or unreadable.
    pub fn load<S: Store>(store: &S) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("ignoring malformed settings: {err}");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(err) => {
                warn!("could not read settings: {err}");
                Settings::default()
            }
        }
    }

    pub fn save<S: Store>(&self, store: &mut S) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(self)?;
        store.set(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::records::{FileStore, MemoryStore};

    #[test]
    fn defaults_match_the_start_screen() {
        let settings = Settings::load(&MemoryStore::new());
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.theme, ThemeKind::Emoji);
        assert!(!settings.dark_mode);
        assert!(!settings.music);
    }

    #[test]
    fn survives_a_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        let settings = Settings {
            difficulty: Difficulty::Hard,
            theme: ThemeKind::Flags,
            dark_mode: true,
            music: true,
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn partial_record_fills_in_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"theme":"animals","dark_mode":true}"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.theme, ThemeKind::Animals);
        assert!(settings.dark_mode);
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "dark=yes").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
