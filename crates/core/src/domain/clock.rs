use std::fmt;
use std::sync::Arc;

use super::period::{Period, duration_of};
use crate::ports::Clock;

/// Whether the base timestamp follows the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    Running,
    Paused,
}

/// Snapshot of the engine's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub base_seconds: i64,
    pub paused: bool,
    pub selected_period: Period,
}

impl ClockState {
    /// Base timestamp plus the selected period
    pub fn future_seconds(&self) -> i64 {
        self.base_seconds.saturating_add(duration_of(self.selected_period))
    }

    pub fn mode(&self) -> ClockMode {
        if self.paused {
            ClockMode::Paused
        } else {
            ClockMode::Running
        }
    }
}

/// Owns the base timestamp and decides when it moves.
///
/// While running, [`tick`](Self::tick) keeps the base in step with the wall
/// clock. Manual edits and "set to current" freeze it. The engine reads wall
/// time only through the injected [`Clock`].
pub struct ClockEngine {
    clock: Arc<dyn Clock>,
    state: ClockState,
}

impl ClockEngine {
    /// A running engine at the clock's current time with the default period
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let base_seconds = clock.now();
        Self {
            clock,
            state: ClockState {
                base_seconds,
                paused: false,
                selected_period: Period::default(),
            },
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn mode(&self) -> ClockMode {
        self.state.mode()
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn base_seconds(&self) -> i64 {
        self.state.base_seconds
    }

    pub fn selected_period(&self) -> Period {
        self.state.selected_period
    }

    /// Recomputed on every call
    pub fn future_seconds(&self) -> i64 {
        self.state.future_seconds()
    }

    /// Current reading of the injected clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Follow the wall clock. Ignored while paused.
    pub fn tick(&mut self, now: i64) {
        if !self.state.paused {
            self.state.base_seconds = now;
        }
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    /// Start following the wall clock again, resynchronizing immediately
    pub fn resume(&mut self) {
        self.state.paused = false;
        self.state.base_seconds = self.clock.now();
    }

    pub fn set_period(&mut self, period: Period) {
        self.state.selected_period = period;
    }

    /// Use `sec` as the base and freeze it there
    pub fn set_base_manually(&mut self, sec: i64) {
        self.state.base_seconds = sec;
        self.state.paused = true;
    }

    /// Freeze at the current wall-clock time
    pub fn set_to_current_frozen(&mut self) {
        self.state.base_seconds = self.clock.now();
        self.state.paused = true;
    }

    /// Back to the initial configuration: default period, running, now
    pub fn reset(&mut self) {
        self.state.selected_period = Period::default();
        self.state.paused = false;
        self.state.base_seconds = self.clock.now();
    }
}

impl fmt::Debug for ClockEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockEngine").field("state", &self.state).finish()
    }
}
