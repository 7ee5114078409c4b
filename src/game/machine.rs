//! Per-card flip rules.
//!
//! A card goes `Hidden -> Flipped -> Matched` or back to `Hidden`. At most one
//! unmatched card waits in the pending register; the second flip of an attempt
//! counts a move and either matches the pair or locks the board until
//! [`Game::settle`] turns both cards back over.

use std::time::Duration;

use log::debug;

use super::error::FlipRejected;
use super::state::{Board, CardState, StarRating};

/// How long a mismatched pair stays face up before the owner calls `settle`.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of an attempt is now face up.
    Revealed { position: usize },
    /// Second card matched the pending one.
    Matched { pair: [usize; 2], won: bool },
    /// Second card differs; the board is locked until `settle`.
    Mismatched { pair: [usize; 2] },
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    pending: Option<usize>,
    locked: Option<[usize; 2]>,
    moves: u32,
    matched_pairs: usize,
    stars: StarRating,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            pending: None,
            locked: None,
            moves: 0,
            matched_pairs: 0,
            stars: StarRating::Three,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    pub fn stars(&self) -> StarRating {
        self.stars
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    pub fn flip(&mut self, position: usize) -> Result<FlipOutcome, FlipRejected> {
        if self.locked.is_some() {
            return Err(FlipRejected::Locked);
        }
        if self.is_won() {
            return Err(FlipRejected::Finished);
        }
        let Some(card) = self.board.card_mut(position) else {
            return Err(FlipRejected::OutOfBounds { position });
        };
        match card.state {
            CardState::Flipped => return Err(FlipRejected::AlreadyFlipped { position }),
            CardState::Matched => return Err(FlipRejected::AlreadyMatched { position }),
            CardState::Hidden => card.state = CardState::Flipped,
        }

        let Some(first) = self.pending.take() else {
            self.pending = Some(position);
            debug!("revealed card {position}");
            return Ok(FlipOutcome::Revealed { position });
        };

        self.moves += 1;
        self.stars = StarRating::for_moves(self.moves, self.total_pairs());
        let pair = [first, position];

        let cards = self.board.cards();
        if cards[first].symbol == cards[position].symbol {
            self.set_state(pair, CardState::Matched);
            self.matched_pairs += 1;
            let won = self.is_won();
            debug!(
                "matched {first} and {position} ({}/{} pairs)",
                self.matched_pairs,
                self.total_pairs()
            );
            Ok(FlipOutcome::Matched { pair, won })
        } else {
            self.locked = Some(pair);
            debug!("mismatch on {first} and {position}, board locked");
            Ok(FlipOutcome::Mismatched { pair })
        }
    }

    /// Turns a mismatched pair face down and unlocks the board.
    pub fn settle(&mut self) -> Option<[usize; 2]> {
        let pair = self.locked.take()?;
        self.set_state(pair, CardState::Hidden);
        Some(pair)
    }

    fn set_state(&mut self, positions: [usize; 2], state: CardState) {
        for position in positions {
            if let Some(card) = self.board.card_mut(position) {
                card.state = state;
            }
        }
    }
}
