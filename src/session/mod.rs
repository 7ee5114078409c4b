mod clock;
mod controller;
mod events;

pub use clock::{ManualTicker, Stopwatch, Ticker};
pub use controller::{Session, WIN_DELAY};
pub use events::{EventLog, GameSummary, SessionEvent, SessionObserver};
