// Composition root: wires the clock session, adapters and the MVU TUI together

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use unixtime_core::app::{ClockProjection, Command, CopyTarget};
use unixtime_core::ports::{Clipboard, Clock, ZoneLabel};

use crate::config::Config;
use crate::session::ClockSession;
use crate::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};

/// How long the main loop waits for input before checking the ticker again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application struct that coordinates everything
pub struct UnixTimeApp {
    /// Engine plus its timer
    session: ClockSession,

    /// The TUI model (MVU pattern)
    tui_model: TuiModel,

    clipboard: Box<dyn Clipboard>,

    zones: Box<dyn ZoneLabel>,

    config: Config,
}

impl UnixTimeApp {
    /// Build the app from config and its ports
    pub fn new(
        config: Config,
        session: ClockSession,
        clipboard: Box<dyn Clipboard>,
        zones: Box<dyn ZoneLabel>,
    ) -> Self {
        let mut session = session;

        session.set_period(config.clock.initial_period);
        if let Some(at) = config.clock.start_at {
            session.set_base_manually(at);
        } else if config.clock.start_paused {
            session.pause();
        }

        let projection = ClockProjection::from_state(&session.state(), zones.as_ref());
        let mut tui_model = TuiModel::new(projection);
        tui_model.show_utc = config.ui.show_utc;

        Self {
            session,
            tui_model,
            clipboard,
            zones,
            config,
        }
    }

    pub fn session(&self) -> &ClockSession {
        &self.session
    }

    pub fn model(&self) -> &TuiModel {
        &self.tui_model
    }

    pub fn should_quit(&self) -> bool {
        self.tui_model.should_quit
    }

    /// Rebuild the projection from the engine's current state
    pub fn refresh(&mut self) {
        let projection = ClockProjection::from_state(&self.session.state(), self.zones.as_ref());
        self.tui_model.set_projection(projection);
    }

    /// Work done once per loop iteration: apply timer firings and expire
    /// the copy acknowledgment. Returns whether anything visible changed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let ticks = self.session.pump();
        let expired = self.tui_model.expire_copied(now);
        if ticks > 0 {
            self.refresh();
        }
        ticks > 0 || expired
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers, now: Instant) -> Result<()> {
        let message = TuiUpdate::handle_key(&mut self.tui_model, key, modifiers)?;
        self.handle_message(message, now);
        Ok(())
    }

    pub fn handle_message(&mut self, message: TuiMessage, now: Instant) {
        match message {
            TuiMessage::Command(Command::Quit) => {
                info!("Quit requested by user");
                self.tui_model.should_quit = true;
            }
            TuiMessage::Command(Command::Copy { target }) => self.copy(target, now),
            TuiMessage::Command(cmd) => {
                debug!("Applying command: {:?}", cmd);
                self.session.apply(&cmd);
                self.refresh();
            }
            TuiMessage::None => {}
        }
    }

    fn copy(&mut self, target: CopyTarget, now: Instant) {
        let text = self.tui_model.projection.copy_text(target);
        match self.clipboard.copy(&text) {
            Ok(()) => {
                info!("Copied {:?} timestamp {}", target, text);
                self.tui_model.mark_copied(target, now, self.config.ui.copied_feedback());
            }
            Err(e) => {
                // The acknowledgment simply stays unset
                warn!("Copy failed: {}", e);
            }
        }
    }

    /// Main loop: input, timer firings, rendering
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut needs_redraw = true;

        loop {
            if self.on_frame(Instant::now()) {
                needs_redraw = true;
            }

            if needs_redraw {
                terminal.draw(|frame| TuiView::render(&self.tui_model, frame))?;
                needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code, key.modifiers, Instant::now())?;
                        needs_redraw = true;
                    }
                    Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                }
            }

            if self.should_quit() {
                info!("Quit requested, exiting main loop");
                break;
            }
        }

        Ok(())
    }
}

/// Set up the terminal, run the app, and restore the terminal
pub fn run_tui(app: &mut UnixTimeApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Application error: {}", err);
    }
    res
}

/// Write the current and future timestamps once, for `--once`
pub fn print_once<W: Write>(
    config: &Config,
    clock: Arc<dyn Clock>,
    zones: &dyn ZoneLabel,
    out: &mut W,
) -> Result<()> {
    let mut engine = unixtime_core::ClockEngine::new(clock);
    engine.set_period(config.clock.initial_period);
    if let Some(at) = config.clock.start_at {
        engine.set_base_manually(at);
    }

    let projection = ClockProjection::from_state(&engine.state(), zones);
    for (title, target) in [
        ("Current UNIX time".to_string(), CopyTarget::Current),
        (format!("Future UNIX time (+{})", projection.period.label()), CopyTarget::Future),
    ] {
        let view = projection.view(target);
        writeln!(out, "{}: {}", title, view.seconds)?;
        writeln!(out, "  {}: {}", view.zone_label, view.local)?;
        if config.ui.show_utc {
            writeln!(out, "  UTC: {}", view.utc)?;
        }
    }
    writeln!(out, "{}", projection.adding_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use unixtime_core::CoreError;
    use unixtime_core::Period;
    use unixtime_core::ports::{FixedZoneLabel, ManualClock};

    struct RefusingClipboard;

    impl Clipboard for RefusingClipboard {
        fn copy(&mut self, _text: &str) -> unixtime_core::Result<()> {
            Err(CoreError::Clipboard { reason: "blocked".to_string() })
        }
    }

    fn app_with(config: Config, clipboard: Box<dyn Clipboard>) -> (UnixTimeApp, ManualClock) {
        let clock = ManualClock::new(1000);
        let session = ClockSession::with_interval(Arc::new(clock.clone()), Duration::from_secs(3600));
        let app = UnixTimeApp::new(config, session, clipboard, Box::new(FixedZoneLabel(None)));
        (app, clock)
    }

    #[test]
    fn test_initial_period_from_config() {
        let mut config = Config::default();
        config.clock.initial_period = Period::OneHour;
        let (app, _) = app_with(config, Box::new(unixtime_core::ports::MemoryClipboard::default()));
        assert_eq!(app.model().projection.future.seconds, 4600);
        assert!(!app.model().projection.paused);
    }

    #[test]
    fn test_start_at_freezes() {
        let mut config = Config::default();
        config.clock.start_at = Some(2000);
        let (app, _) = app_with(config, Box::new(unixtime_core::ports::MemoryClipboard::default()));
        assert!(app.session().state().paused);
        assert!(!app.session().is_ticking());
        assert_eq!(app.model().projection.current.seconds, 2000);
    }

    #[test]
    fn test_start_paused() {
        let mut config = Config::default();
        config.clock.start_paused = true;
        let (app, _) = app_with(config, Box::new(unixtime_core::ports::MemoryClipboard::default()));
        assert!(app.model().projection.paused);
        assert_eq!(app.model().projection.current.seconds, 1000);
    }

    #[test]
    fn test_copy_failure_leaves_ack_unset() {
        let (mut app, _) = app_with(Config::default(), Box::new(RefusingClipboard));
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE, Instant::now()).unwrap();
        assert!(app.model().copied.is_none());
    }

    #[test]
    fn test_copy_success_sets_ack() {
        let (mut app, _) = app_with(Config::default(), Box::new(unixtime_core::ports::MemoryClipboard::default()));
        let now = Instant::now();
        app.handle_key(KeyCode::Char('f'), KeyModifiers::NONE, now).unwrap();
        assert!(app.model().is_copied(CopyTarget::Future));
        assert!(app.on_frame(now + Duration::from_millis(1500)));
        assert!(app.model().copied.is_none());
    }

    #[test]
    fn test_commands_refresh_projection() {
        let (mut app, clock) = app_with(Config::default(), Box::new(unixtime_core::ports::MemoryClipboard::default()));
        app.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, Instant::now()).unwrap();
        assert!(app.model().projection.paused);

        clock.set(5000);
        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE, Instant::now()).unwrap();
        assert!(!app.model().projection.paused);
        assert_eq!(app.model().projection.current.seconds, 5000);
    }

    #[test]
    fn test_quit_via_key() {
        let (mut app, _) = app_with(Config::default(), Box::new(unixtime_core::ports::MemoryClipboard::default()));
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE, Instant::now()).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_through_test_backend() -> Result<()> {
        let (app, _) = app_with(Config::default(), Box::new(unixtime_core::ports::MemoryClipboard::default()));
        let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
        terminal.draw(|frame| TuiView::render(app.model(), frame))?;
        Ok(())
    }

    #[test]
    fn test_print_once() -> Result<()> {
        let mut config = Config::default();
        config.clock.initial_period = Period::OneHour;
        config.clock.start_at = Some(0);
        let mut out = Vec::new();
        print_once(&config, Arc::new(ManualClock::new(1000)), &FixedZoneLabel(None), &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Current UNIX time: 0\n"));
        assert!(text.contains("  UTC: 1970-01-01 00:00:00\n"));
        assert!(text.contains("Future UNIX time (+1 hour): 3600\n"));
        assert!(text.contains("  UTC: 1970-01-01 01:00:00\n"));
        assert!(text.contains("Currently adding 3,600 seconds."));
        Ok(())
    }
}
