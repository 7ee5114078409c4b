use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::state::Symbol;

const FRUITS: [&str; 18] = [
    "🍎", "🍌", "🍒", "🍇", "🥝", "🍍", "🍑", "🍉", "🍋", "🥥", "🍓", "🥭", "🍐", "🍊", "🍈", "🫐",
    "🍅", "🥑",
];

const ANIMALS: [&str; 18] = [
    "🐶", "🐱", "🦊", "🐼", "🐸", "🐵", "🐰", "🦁", "🐷", "🐔", "🐧", "🐨", "🐯", "🐮", "🐻", "🐹",
    "🦄", "🐙",
];

const FLAGS: [&str; 18] = [
    "🇺🇸", "🇮🇳", "🇯🇵", "🇫🇷", "🇨🇦", "🇧🇷", "🇩🇪", "🇨🇳", "🇮🇹", "🇷🇺", "🇦🇺", "🇪🇸", "🇲🇽", "🇰🇷", "🇦🇷", "🇸🇪",
    "🇳🇴", "🇿🇦",
];

/// The built-in symbol sets a player can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Emoji,
    Animals,
    Flags,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Emoji, ThemeKind::Animals, ThemeKind::Flags];

    pub fn code(self) -> &'static str {
        match self {
            ThemeKind::Emoji => "emoji",
            ThemeKind::Animals => "animals",
            ThemeKind::Flags => "flags",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Emoji => "Fruits",
            ThemeKind::Animals => "Animals",
            ThemeKind::Flags => "Flags",
        }
    }

    fn symbols(self) -> &'static [&'static str] {
        match self {
            ThemeKind::Emoji => &FRUITS,
            ThemeKind::Animals => &ANIMALS,
            ThemeKind::Flags => &FLAGS,
        }
    }

    pub fn theme(self) -> Theme {
        Theme {
            name: self.code().to_string(),
            symbols: self.symbols().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A named set of distinct card faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    symbols: Vec<Symbol>,
}

impl Theme {
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let name = name.into();
        let mut distinct: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if distinct.contains(&symbol) {
                return Err(GameError::DuplicateSymbol {
                    theme: name,
                    symbol,
                });
            }
            distinct.push(symbol);
        }
        Ok(Theme {
            name,
            symbols: distinct,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl From<ThemeKind> for Theme {
    fn from(kind: ThemeKind) -> Self {
        kind.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Difficulty;

    #[test]
    fn builtin_themes_cover_the_largest_board() {
        let needed = Difficulty::Hard.grid_size().total_pairs();
        for kind in ThemeKind::ALL {
            let theme = kind.theme();
            assert!(theme.symbols().len() >= needed, "{} is too small", theme.name());
            assert!(Theme::new(theme.name(), theme.symbols().to_vec()).is_ok());
        }
    }

    #[test]
    fn repeated_symbol_is_rejected() {
        let err = Theme::new("dupes", ["A", "B", "A"]).unwrap_err();
        assert_eq!(
            err,
            GameError::DuplicateSymbol {
                theme: "dupes".to_string(),
                symbol: "A".to_string(),
            }
        );
    }

    #[test]
    fn theme_codes_round_trip() {
        for kind in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ThemeKind::from_code("plants"), None);
    }
}
