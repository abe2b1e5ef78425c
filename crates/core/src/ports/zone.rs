/// Label used when no zone name is available
pub const LOCAL_FALLBACK_LABEL: &str = "Local";

/// Source of short display names for the local time zone
pub trait ZoneLabel {
    /// Short name of the local zone in effect at `sec`, if known
    fn short_zone_name(&self, sec: i64) -> Option<String>;
}

/// Zone name at `sec`, or `"Local"` when the source has none
pub fn zone_label_or_local(source: &dyn ZoneLabel, sec: i64) -> String {
    source
        .short_zone_name(sec)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| LOCAL_FALLBACK_LABEL.to_string())
}

/// A zone source that always answers with the same name
#[derive(Debug, Clone, Default)]
pub struct FixedZoneLabel(pub Option<String>);

impl ZoneLabel for FixedZoneLabel {
    fn short_zone_name(&self, _sec: i64) -> Option<String> {
        self.0.clone()
    }
}
