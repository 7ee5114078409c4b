use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GameError;

pub type Symbol = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    Hidden,
    Flipped,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub position: usize,
    pub symbol: Symbol,
    pub state: CardState,
}

impl Card {
    pub fn is_face_up(&self) -> bool {
        self.state != CardState::Hidden
    }
}

/// Side length of a square board. Always positive and even, so the card
/// count splits into pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    pub const SMALL: GridSize = GridSize(2);
    pub const MEDIUM: GridSize = GridSize(4);
    pub const LARGE: GridSize = GridSize(6);

    pub fn new(side: u8) -> Result<Self, GameError> {
        if side == 0 || side % 2 != 0 {
            return Err(GameError::InvalidGridSize { side });
        }
        Ok(GridSize(side))
    }

    pub fn side(self) -> u8 {
        self.0
    }

    pub fn card_count(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    pub fn total_pairs(self) -> usize {
        self.card_count() / 2
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        GridSize::new(side)
    }
}

impl From<GridSize> for u8 {
    fn from(grid: GridSize) -> Self {
        grid.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn grid_size(self) -> GridSize {
        match self {
            Difficulty::Easy => GridSize::SMALL,
            Difficulty::Medium => GridSize::MEDIUM,
            Difficulty::Hard => GridSize::LARGE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_grid_size(grid: GridSize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.grid_size() == grid)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarRating {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
}

impl StarRating {
    /// Rating after `moves` pair-attempts on a board of `total_pairs`.
    ///
    /// More than three attempts per pair drops to one star, more than two
    /// drops to two.
    pub fn for_moves(moves: u32, total_pairs: usize) -> Self {
        let moves = moves as usize;
        if moves > total_pairs * 3 {
            StarRating::One
        } else if moves > total_pairs * 2 {
            StarRating::Two
        } else {
            StarRating::Three
        }
    }

    pub fn count(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.count() {
            f.write_str("⭐")?;
        }
        Ok(())
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StarRating::One),
            2 => Ok(StarRating::Two),
            3 => Ok(StarRating::Three),
            other => Err(format!("star rating must be 1..=3, got {other}")),
        }
    }
}

impl From<StarRating> for u8 {
    fn from(stars: StarRating) -> Self {
        stars.count()
    }
}

/// Cards in display order, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: GridSize,
    cards: Vec<Card>,
}

impl Board {
    pub(crate) fn from_symbols(grid: GridSize, symbols: Vec<Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card {
                position,
                symbol,
                state: CardState::Hidden,
            })
            .collect();
        Board { grid, cards }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub(crate) fn card_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|card| card.state == CardState::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_rejects_odd_and_zero() {
        assert_eq!(GridSize::new(0), Err(GameError::InvalidGridSize { side: 0 }));
        assert_eq!(GridSize::new(3), Err(GameError::InvalidGridSize { side: 3 }));
        assert_eq!(GridSize::new(4).map(GridSize::total_pairs), Ok(8));
    }

    #[test]
    fn difficulty_maps_to_grid_sizes() {
        let sides: Vec<u8> = Difficulty::ALL
            .iter()
            .map(|d| d.grid_size().side())
            .collect();
        assert_eq!(sides, vec![2, 4, 6]);
        assert_eq!(Difficulty::from_grid_size(GridSize::LARGE), Some(Difficulty::Hard));
    }

    #[test]
    fn star_thresholds_for_sixteen_card_board() {
        assert_eq!(StarRating::for_moves(8, 8), StarRating::Three);
        assert_eq!(StarRating::for_moves(16, 8), StarRating::Three);
        assert_eq!(StarRating::for_moves(17, 8), StarRating::Two);
        assert_eq!(StarRating::for_moves(24, 8), StarRating::Two);
        assert_eq!(StarRating::for_moves(25, 8), StarRating::One);
    }

    #[test]
    fn star_rating_never_rises_with_more_moves() {
        for total_pairs in [2, 8, 18] {
            let mut previous = StarRating::Three;
            for moves in 0..200 {
                let current = StarRating::for_moves(moves, total_pairs);
                assert!(current <= previous, "{moves} moves raised the rating");
                previous = current;
            }
        }
    }

    #[test]
    fn star_rating_renders_as_stars() {
        assert_eq!(StarRating::Three.to_string(), "⭐⭐⭐");
        assert_eq!(StarRating::One.to_string(), "⭐");
    }
}
