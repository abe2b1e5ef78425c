use chrono::{Local, TimeZone, Utc};
use std::fmt;

use crate::app::CopyTarget;
use crate::domain::{ClockState, Period, format_in, group_thousands};
use crate::ports::{ZoneLabel, zone_label_or_local};

/// One timestamp rendered every way the UI shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampView {
    pub seconds: i64,
    pub local: String,
    pub utc: String,
    pub zone_label: String,
}

impl TimestampView {
    fn build<Tz>(seconds: i64, zones: &dyn ZoneLabel, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            seconds,
            local: format_in(seconds, tz),
            utc: format_in(seconds, &Utc),
            zone_label: zone_label_or_local(zones, seconds),
        }
    }
}

/// Read-only projection of the clock for UI consumption.
///
/// Built fresh from a [`ClockState`] whenever the UI needs it, so the future
/// timestamp is never stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockProjection {
    pub current: TimestampView,
    pub future: TimestampView,
    pub period: Period,
    pub add_seconds: i64,
    pub paused: bool,
}

impl ClockProjection {
    /// Projection with local strings in the host's zone
    pub fn from_state(state: &ClockState, zones: &dyn ZoneLabel) -> Self {
        Self::from_state_in(state, zones, &Local)
    }

    /// Projection with local strings in `tz`
    pub fn from_state_in<Tz>(state: &ClockState, zones: &dyn ZoneLabel, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            current: TimestampView::build(state.base_seconds, zones, tz),
            future: TimestampView::build(state.future_seconds(), zones, tz),
            period: state.selected_period,
            add_seconds: state.selected_period.seconds(),
            paused: state.paused,
        }
    }

    pub fn view(&self, target: CopyTarget) -> &TimestampView {
        match target {
            CopyTarget::Current => &self.current,
            CopyTarget::Future => &self.future,
        }
    }

    /// Text placed on the clipboard for `target`
    pub fn copy_text(&self, target: CopyTarget) -> String {
        self.view(target).seconds.to_string()
    }

    /// e.g. "Currently adding 86,400 seconds."
    pub fn adding_text(&self) -> String {
        format!("Currently adding {} seconds.", group_thousands(self.add_seconds))
    }
}
