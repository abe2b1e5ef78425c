use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use unixtime_core::app::Command;
use unixtime_core::ports::Clock;
use unixtime_core::{ClockEngine, ClockState, Period};

use crate::ticker::Ticker;

/// Interval of the live clock
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The clock engine together with the timer that drives it.
///
/// The ticker only exists while the engine is running: every operation that
/// freezes the clock drops it, and `resume`/`reset` start a new one after
/// resynchronizing. Dropping the session stops the timer.
pub struct ClockSession {
    engine: ClockEngine,
    clock: Arc<dyn Clock>,
    ticker: Option<Ticker>,
    interval: Duration,
}

impl ClockSession {
    /// A running session ticking once per [`TICK_INTERVAL`]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_interval(clock, TICK_INTERVAL)
    }

    pub fn with_interval(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        let engine = ClockEngine::new(clock.clone());
        let mut session = Self {
            engine,
            clock,
            ticker: None,
            interval,
        };
        session.start_ticker();
        session
    }

    pub fn engine(&self) -> &ClockEngine {
        &self.engine
    }

    pub fn state(&self) -> ClockState {
        self.engine.state()
    }

    /// Whether a timer is currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Apply every timer firing received so far; returns how many landed
    pub fn pump(&mut self) -> usize {
        let Some(ticker) = &self.ticker else {
            return 0;
        };
        let readings = ticker.drain();
        for now in &readings {
            self.engine.tick(*now);
        }
        readings.len()
    }

    pub fn pause(&mut self) {
        self.stop_ticker();
        self.engine.pause();
        debug!("Clock paused at {}", self.engine.base_seconds());
    }

    pub fn resume(&mut self) {
        self.engine.resume();
        self.start_ticker();
        debug!("Clock resumed at {}", self.engine.base_seconds());
    }

    pub fn reset(&mut self) {
        self.stop_ticker();
        self.engine.reset();
        self.start_ticker();
        debug!("Clock reset to {}", self.engine.base_seconds());
    }

    pub fn set_period(&mut self, period: Period) {
        self.engine.set_period(period);
        debug!("Period set to {}", period);
    }

    pub fn set_base_manually(&mut self, sec: i64) {
        self.stop_ticker();
        self.engine.set_base_manually(sec);
        debug!("Base time set manually to {}", sec);
    }

    pub fn set_to_current_frozen(&mut self) {
        self.stop_ticker();
        self.engine.set_to_current_frozen();
        debug!("Clock frozen at current time {}", self.engine.base_seconds());
    }

    /// Apply a clock command. Returns `false` for commands that are not
    /// about the clock (copy, quit), which are left to the caller.
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => self.reset(),
            Command::SetToCurrent => self.set_to_current_frozen(),
            Command::SetPeriod { period } => self.set_period(*period),
            Command::SetBase { seconds } => self.set_base_manually(*seconds),
            Command::Copy { .. } | Command::Quit => return false,
        }
        true
    }

    fn start_ticker(&mut self) {
        if self.ticker.is_none() {
            self.ticker = Some(Ticker::start(self.clock.clone(), self.interval));
        }
    }

    fn stop_ticker(&mut self) {
        // Dropping joins the thread and discards queued readings
        self.ticker = None;
    }
}
