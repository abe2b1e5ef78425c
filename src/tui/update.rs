use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;
use unixtime_core::app::{Command, CopyTarget};
use unixtime_core::{from_editable_local, to_editable_local};

use super::model::{InputMode, TuiModel, ViewMode};

/// Messages that can be sent from the TUI to the clock session
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Send a command to the session
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly
    /// Returns a TuiMessage that should be applied to the session
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(TuiMessage::Command(Command::Quit));
        }

        // Text input swallows everything else while open
        if model.input.mode != InputMode::None {
            return Self::handle_input_keys(model, key);
        }

        match model.mode {
            ViewMode::Clock => Self::handle_clock_keys(model, key),
            ViewMode::Help => Self::handle_help_keys(model, key),
        }
    }

    /// Keys while the base-time field is open.
    ///
    /// Every keystroke that leaves the field parseable sets the base time
    /// (which freezes the clock); unparseable text is flagged and ignored.
    fn handle_input_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Char(c) => {
                model.input.text.push(c);
                Ok(Self::edited(model))
            }

            KeyCode::Backspace => {
                model.input.text.pop();
                Ok(Self::edited(model))
            }

            KeyCode::Enter | KeyCode::Esc => {
                model.end_edit();
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }

    fn edited(model: &mut TuiModel) -> TuiMessage {
        match from_editable_local(&model.input.text) {
            Ok(seconds) => {
                model.input.invalid = false;
                TuiMessage::Command(Command::SetBase { seconds })
            }
            Err(e) => {
                debug!("Ignoring edit: {}", e);
                model.input.invalid = true;
                TuiMessage::None
            }
        }
    }

    /// Keys in the main clock view
    fn handle_clock_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        let paused = model.projection.paused;
        let period = model.projection.period;

        let msg = match key {
            KeyCode::Char('q') | KeyCode::Esc => TuiMessage::Command(Command::Quit),

            KeyCode::Char('p') if !paused => TuiMessage::Command(Command::Pause),

            KeyCode::Char('r') | KeyCode::Char(' ') if paused => TuiMessage::Command(Command::Resume),

            KeyCode::Char('R') | KeyCode::Char('0') => TuiMessage::Command(Command::Reset),

            KeyCode::Char('n') => TuiMessage::Command(Command::SetToCurrent),

            KeyCode::Char('e') | KeyCode::Enter => {
                model.begin_edit(to_editable_local(model.projection.current.seconds));
                TuiMessage::None
            }

            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                TuiMessage::Command(Command::SetPeriod { period: period.prev() })
            }

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                TuiMessage::Command(Command::SetPeriod { period: period.next() })
            }

            KeyCode::Char('c') => TuiMessage::Command(Command::Copy { target: CopyTarget::Current }),

            KeyCode::Char('f') => TuiMessage::Command(Command::Copy { target: CopyTarget::Future }),

            KeyCode::Char('?') => {
                model.mode = ViewMode::Help;
                TuiMessage::None
            }

            _ => TuiMessage::None,
        };

        Ok(msg)
    }

    /// Any of the usual "back" keys leaves help
    fn handle_help_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter) {
            model.mode = ViewMode::Clock;
        }
        Ok(TuiMessage::None)
    }
}
