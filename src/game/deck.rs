//! Board generation.
//!
//! Both shuffles go through [`SliceRandom::shuffle`], which is a
//! Fisher-Yates pass: every permutation of the input is equally likely.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GameError;
use super::state::{Board, GridSize, Symbol};
use super::theme::Theme;

/// Deals a fresh board: picks `grid.total_pairs()` distinct symbols from
/// `theme`, doubles them and shuffles the result.
pub fn build_board<R: Rng + ?Sized>(
    grid: GridSize,
    theme: &Theme,
    rng: &mut R,
) -> Result<Board, GameError> {
    let total_pairs = grid.total_pairs();
    let available = theme.symbols().len();
    if total_pairs > available {
        return Err(GameError::InsufficientSymbols {
            theme: theme.name().to_string(),
            required: total_pairs,
            available,
        });
    }

    let mut pool: Vec<Symbol> = theme.symbols().to_vec();
    pool.shuffle(rng);
    pool.truncate(total_pairs);

    let mut values: Vec<Symbol> = Vec::with_capacity(grid.card_count());
    for symbol in pool {
        values.push(symbol.clone());
        values.push(symbol);
    }
    values.shuffle(rng);

    debug!(
        "dealt {} cards from theme '{}' ({} pairs)",
        values.len(),
        theme.name(),
        total_pairs
    );
    Ok(Board::from_symbols(grid, values))
}
