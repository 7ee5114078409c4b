use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::clock::{Stopwatch, Ticker};
use super::events::{GameSummary, SessionObserver};
use crate::game::{
    FlipOutcome, FlipRejected, Game, GameError, GridSize, StarRating, Theme, build_board,
};
use crate::records::{Leaderboard, ScoreEntry, Store};

/// Pause between the winning match and the win screen. Owned by whoever
/// renders the session.
pub const WIN_DELAY: Duration = Duration::from_millis(600);

fn notify(
    observers: &mut [Box<dyn SessionObserver>],
    mut f: impl FnMut(&mut dyn SessionObserver),
) {
    for observer in observers.iter_mut() {
        f(observer.as_mut());
    }
}

/// One player's run of games: the current board, its clock and the
/// leaderboard that wins are recorded into.
pub struct Session<T: Ticker, S: Store> {
    game: Option<Game>,
    setup: Option<(GridSize, Theme)>,
    stopwatch: Stopwatch<T>,
    leaderboard: Leaderboard<S>,
    rng: StdRng,
    observers: Vec<Box<dyn SessionObserver>>,
    generation: u64,
    recorded: bool,
}

impl<T: Ticker, S: Store> Session<T, S> {
    pub fn new(ticker: T, store: S) -> Self {
        Self::with_rng(ticker, store, StdRng::from_os_rng())
    }

    pub fn with_rng(ticker: T, store: S, rng: StdRng) -> Self {
        Session {
            game: None,
            setup: None,
            stopwatch: Stopwatch::new(ticker),
            leaderboard: Leaderboard::new(store),
            rng,
            observers: Vec::new(),
            generation: 0,
            recorded: false,
        }
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Deals a new board and resets every counter. On error the previous
    /// game, if any, is left as it was.
    pub fn start(&mut self, grid: GridSize, theme: &Theme) -> Result<(), GameError> {
        let board = build_board(grid, theme, &mut self.rng)?;
        self.game = Some(Game::new(board));
        self.setup = Some((grid, theme.clone()));
        self.generation = self.generation.wrapping_add(1);
        self.recorded = false;

        self.stopwatch.stop();
        self.stopwatch.reset();
        self.stopwatch.start();

        info!(
            "session {} started: {}x{} board, theme '{}'",
            self.generation,
            grid.side(),
            grid.side(),
            theme.name()
        );
        if let Some(game) = &self.game {
            notify(&mut self.observers, |o| o.on_board_changed(game.board()));
        }
        Ok(())
    }

    /// Starts over with the last grid and theme.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let Some((grid, theme)) = self.setup.clone() else {
            return Err(GameError::NoActiveGame);
        };
        self.start(grid, &theme)
    }

    pub fn click(&mut self, position: usize) -> Result<FlipOutcome, FlipRejected> {
        let game = self.game.as_mut().ok_or(FlipRejected::Idle)?;
        let outcome = game.flip(position).inspect_err(|reason| {
            debug!("ignored click on {position}: {reason}");
        })?;
        let (moves, stars) = (game.moves(), game.stars());

        match outcome {
            FlipOutcome::Revealed { position } => self.emit_cards(&[position]),
            FlipOutcome::Matched { pair, .. } | FlipOutcome::Mismatched { pair } => {
                self.emit_cards(&pair);
                notify(&mut self.observers, |o| o.on_move_made(moves, stars));
            }
        }
        if let FlipOutcome::Matched { won: true, .. } = outcome {
            self.on_game_won();
        }
        Ok(outcome)
    }

    /// Ends the settle delay after a mismatch.
    pub fn settle(&mut self) -> Option<[usize; 2]> {
        let pair = self.game.as_mut()?.settle()?;
        self.emit_cards(&pair);
        Some(pair)
    }

    pub fn tick(&mut self) {
        if self.stopwatch.tick() {
            let elapsed = self.stopwatch.elapsed();
            notify(&mut self.observers, |o| o.on_tick(elapsed));
        }
    }

    pub fn start_timer(&mut self) {
        self.stopwatch.start();
    }

    pub fn stop_timer(&mut self) {
        self.stopwatch.stop();
    }

    pub fn restart_timer(&mut self) {
        self.stopwatch.restart();
    }

    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.setup.as_ref().map(|(_, theme)| theme)
    }

    pub fn grid(&self) -> Option<GridSize> {
        self.setup.as_ref().map(|(grid, _)| *grid)
    }

    pub fn moves(&self) -> u32 {
        self.game.as_ref().map_or(0, Game::moves)
    }

    pub fn matched_pairs(&self) -> usize {
        self.game.as_ref().map_or(0, Game::matched_pairs)
    }

    pub fn stars(&self) -> StarRating {
        self.game.as_ref().map_or(StarRating::Three, Game::stars)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.stopwatch.elapsed()
    }

    pub fn is_won(&self) -> bool {
        self.game.as_ref().is_some_and(Game::is_won)
    }

    /// Bumped on every `start`; lets deferred callbacks tell whether they
    /// still belong to the current board.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticker(&self) -> &T {
        self.stopwatch.ticker()
    }

    pub fn leaderboard(&mut self) -> &mut Leaderboard<S> {
        &mut self.leaderboard
    }

    fn emit_cards(&mut self, positions: &[usize]) {
        let Some(game) = &self.game else {
            return;
        };
        for &position in positions {
            if let Some(card) = game.board().card(position) {
                notify(&mut self.observers, |o| o.on_card_changed(card));
            }
        }
    }

    fn on_game_won(&mut self) {
        if self.recorded {
            return;
        }
        let Some(game) = &self.game else {
            return;
        };
        self.stopwatch.stop();
        let score = ScoreEntry {
            elapsed_seconds: self.stopwatch.elapsed(),
            moves: game.moves(),
            star_rating: game.stars(),
        };
        self.recorded = true;

        let leaderboard = self.leaderboard.record(score);
        info!(
            "session {} won in {}s with {} moves ({} stars)",
            self.generation,
            score.elapsed_seconds,
            score.moves,
            score.star_rating.count()
        );
        let summary = GameSummary { score, leaderboard };
        notify(&mut self.observers, |o| o.on_game_won(&summary));
    }
}
