use chrono::{Local, Offset};
use unixtime_core::instant;
use unixtime_core::ports::ZoneLabel;

/// Labels the local zone by its UTC offset at the instant in question,
/// e.g. `UTC+02:00`, unless an explicit label is configured.
#[derive(Debug, Clone, Default)]
pub struct ChronoZoneLabel {
    override_label: Option<String>,
}

impl ChronoZoneLabel {
    pub fn new(override_label: Option<String>) -> Self {
        Self { override_label }
    }
}

/// `UTC` for a zero offset, otherwise `UTC±HH:MM`
pub fn offset_label(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

impl ZoneLabel for ChronoZoneLabel {
    fn short_zone_name(&self, sec: i64) -> Option<String> {
        if let Some(label) = &self.override_label {
            return Some(label.clone());
        }
        let local = instant(sec).with_timezone(&Local);
        Some(offset_label(local.offset().fix().local_minus_utc()))
    }
}
