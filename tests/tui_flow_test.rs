use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use unixtime::app::UnixTimeApp;
use unixtime::config::Config;
use unixtime::session::ClockSession;
use unixtime_core::ports::{FixedZoneLabel, ManualClock, MemoryClipboard};
use unixtime_core::{Period, from_editable_local};

fn app_at(now: i64) -> (UnixTimeApp, ManualClock) {
    let clock = ManualClock::new(now);
    let session = ClockSession::with_interval(Arc::new(clock.clone()), Duration::from_secs(3600));
    let app = UnixTimeApp::new(
        Config::default(),
        session,
        Box::new(MemoryClipboard::default()),
        Box::new(FixedZoneLabel(None)),
    );
    (app, clock)
}

fn press(app: &mut UnixTimeApp, key: KeyCode) -> Result<()> {
    app.handle_key(key, KeyModifiers::NONE, Instant::now())
}

fn type_text(app: &mut UnixTimeApp, text: &str) -> Result<()> {
    for c in text.chars() {
        press(app, KeyCode::Char(c))?;
    }
    Ok(())
}

#[test]
fn test_period_selection_updates_future() -> Result<()> {
    let (mut app, _) = app_at(1000);
    for _ in 0..3 {
        press(&mut app, KeyCode::Left)?;
    }
    let projection = &app.model().projection;
    assert_eq!(projection.period, Period::OneHour);
    assert_eq!(projection.future.seconds, 4600);
    assert!(!projection.paused);
    Ok(())
}

#[test]
fn test_editing_base_time_freezes_clock() -> Result<()> {
    let (mut app, _) = app_at(1000);

    press(&mut app, KeyCode::Char('e'))?;
    // Clear the prefilled text
    for _ in 0..32 {
        press(&mut app, KeyCode::Backspace)?;
    }
    type_text(&mut app, "2001-02-03T04:05:06")?;
    press(&mut app, KeyCode::Enter)?;

    let expected = from_editable_local("2001-02-03T04:05:06")?;
    assert!(app.session().state().paused);
    assert!(!app.session().is_ticking());
    assert_eq!(app.model().projection.current.seconds, expected);
    Ok(())
}

#[test]
fn test_malformed_edit_leaves_state_unchanged() -> Result<()> {
    let (mut app, _) = app_at(1000);
    let before = app.session().state();

    // Appended to the prefilled time, so every intermediate text is invalid
    press(&mut app, KeyCode::Char('e'))?;
    type_text(&mut app, "not-a-date")?;

    assert!(app.model().input.invalid);
    assert_eq!(app.session().state(), before);
    Ok(())
}

#[test]
fn test_set_to_current_then_reset() -> Result<()> {
    let (mut app, clock) = app_at(1000);
    press(&mut app, KeyCode::Char('+'))?;

    clock.set(1500);
    press(&mut app, KeyCode::Char('n'))?;
    assert!(app.model().projection.paused);
    assert_eq!(app.model().projection.current.seconds, 1500);

    clock.set(2500);
    press(&mut app, KeyCode::Char('R'))?;
    let state = app.session().state();
    assert_eq!(state.selected_period, Period::TwentyFourHours);
    assert!(!state.paused);
    assert_eq!(state.base_seconds, 2500);
    assert!(app.session().is_ticking());
    Ok(())
}

#[test]
fn test_copy_puts_plain_seconds_on_clipboard() -> Result<()> {
    let clock = ManualClock::new(1_700_000_000);
    let session = ClockSession::with_interval(Arc::new(clock), Duration::from_secs(3600));
    let mut app = UnixTimeApp::new(
        Config::default(),
        session,
        Box::new(MemoryClipboard::default()),
        Box::new(FixedZoneLabel(None)),
    );

    press(&mut app, KeyCode::Char('f'))?;
    assert_eq!(app.model().projection.copy_text(unixtime_core::app::CopyTarget::Future), "1700086400");
    assert!(app.model().copied.is_some());
    Ok(())
}
