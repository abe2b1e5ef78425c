use std::time::{Duration, Instant};
use unixtime_core::app::{ClockProjection, CopyTarget};

/// The TUI Model - everything the view needs to draw a frame.
/// The clock data itself lives in `projection`, rebuilt after every change.
#[derive(Debug)]
pub struct TuiModel {
    /// Clock data from the session
    pub projection: ClockProjection,

    /// Base-time edit field
    pub input: InputState,

    /// Current view mode
    pub mode: ViewMode,

    /// Transient "copied" acknowledgment
    pub copied: Option<CopiedAck>,

    /// Whether UTC lines are shown
    pub show_utc: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// Input state for the base-time field
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputState {
    pub mode: InputMode,

    /// Current input text
    pub text: String,

    /// Whether `text` failed to parse on the last keystroke
    pub invalid: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum InputMode {
    #[default]
    None,

    /// Editing the base time
    EditBase,
}

/// Different view modes for the TUI
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ViewMode {
    #[default]
    Clock,

    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopiedAck {
    pub target: CopyTarget,
    pub until: Instant,
}

impl TuiModel {
    pub fn new(projection: ClockProjection) -> Self {
        Self {
            projection,
            input: InputState::default(),
            mode: ViewMode::default(),
            copied: None,
            show_utc: true,
            should_quit: false,
        }
    }

    pub fn set_projection(&mut self, projection: ClockProjection) {
        self.projection = projection;
    }

    pub fn is_editing(&self) -> bool {
        self.input.mode == InputMode::EditBase
    }

    /// Open the base-time field with `text` in it
    pub fn begin_edit(&mut self, text: String) {
        self.input = InputState {
            mode: InputMode::EditBase,
            text,
            invalid: false,
        };
    }

    pub fn end_edit(&mut self) {
        self.input = InputState::default();
    }

    /// Show the acknowledgment for `target` until `now + ttl`
    pub fn mark_copied(&mut self, target: CopyTarget, now: Instant, ttl: Duration) {
        self.copied = Some(CopiedAck {
            target,
            until: now + ttl,
        });
    }

    /// Drop the acknowledgment once its time is up; returns whether it changed
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        match self.copied {
            Some(ack) if now >= ack.until => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.copied.is_some_and(|ack| ack.target == target)
    }
}
