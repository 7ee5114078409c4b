/// Source of the once-a-second tick that drives the elapsed-time counter.
///
/// Implementations only schedule; the owner calls `Session::tick` from the
/// scheduled callback.
pub trait Ticker {
    fn start(&mut self);
    fn stop(&mut self);
}

/// A ticker that never fires by itself. Tests and headless drivers advance
/// time by calling `tick` directly.
#[derive(Clone, Debug, Default)]
pub struct ManualTicker {
    starts: u32,
    stops: u32,
    running: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self) {
        self.starts += 1;
        self.running = true;
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.running = false;
    }
}

/// Elapsed-seconds counter wrapped around a [`Ticker`].
///
/// `start` on a running stopwatch and `stop` on a stopped one are no-ops, so
/// the ticker never holds two live schedules.
#[derive(Debug)]
pub struct Stopwatch<T: Ticker> {
    ticker: T,
    elapsed: u32,
    running: bool,
}

impl<T: Ticker> Stopwatch<T> {
    pub fn new(ticker: T) -> Self {
        Stopwatch {
            ticker,
            elapsed: 0,
            running: false,
        }
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.ticker.start();
        self.running = true;
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.ticker.stop();
        self.running = false;
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Counts one second if running. Returns whether it counted.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(1);
        }
        self.running
    }
}
