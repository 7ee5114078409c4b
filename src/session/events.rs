use std::cell::RefCell;
use std::rc::Rc;

use crate::game::{Board, Card, StarRating};
use crate::records::ScoreEntry;

/// What the player sees after a win: their score and the board it landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub score: ScoreEntry,
    pub leaderboard: Vec<ScoreEntry>,
}

/// Receives session transitions. Every method defaults to doing nothing.
pub trait SessionObserver {
    fn on_board_changed(&mut self, _board: &Board) {}
    fn on_card_changed(&mut self, _card: &Card) {}
    fn on_move_made(&mut self, _moves: u32, _stars: StarRating) {}
    fn on_tick(&mut self, _elapsed_seconds: u32) {}
    fn on_game_won(&mut self, _summary: &GameSummary) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    BoardChanged(Board),
    CardChanged(Card),
    MoveMade { moves: u32, stars: StarRating },
    Tick(u32),
    GameWon(GameSummary),
}

/// Observer that queues events for the owner to drain later.
///
/// Clones share one queue, so one handle can be registered with the session
/// while another is kept for draining.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: SessionEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SessionObserver for EventLog {
    fn on_board_changed(&mut self, board: &Board) {
        self.push(SessionEvent::BoardChanged(board.clone()));
    }

    fn on_card_changed(&mut self, card: &Card) {
        self.push(SessionEvent::CardChanged(card.clone()));
    }

    fn on_move_made(&mut self, moves: u32, stars: StarRating) {
        self.push(SessionEvent::MoveMade { moves, stars });
    }

    fn on_tick(&mut self, elapsed_seconds: u32) {
        self.push(SessionEvent::Tick(elapsed_seconds));
    }

    fn on_game_won(&mut self, summary: &GameSummary) {
        self.push(SessionEvent::GameWon(summary.clone()));
    }
}
