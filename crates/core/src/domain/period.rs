use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds used when a period code is not recognised.
pub const DEFAULT_PERIOD_SECONDS: i64 = 24 * 60 * 60;

/// A duration the user can add to the base timestamp.
///
/// The set is closed; anything read from outside (config files, CLI flags)
/// that does not name one of these falls back to [`Period::TwentyFourHours`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    TwelveHours,
    #[default]
    TwentyFourHours,
    TwoDays,
    SevenDays,
    ThirtyDays,
}

impl Period {
    /// All periods in selector order
    pub const ALL: [Period; 11] = [
        Period::FiveMinutes,
        Period::TenMinutes,
        Period::FifteenMinutes,
        Period::ThirtyMinutes,
        Period::OneHour,
        Period::SixHours,
        Period::TwelveHours,
        Period::TwentyFourHours,
        Period::TwoDays,
        Period::SevenDays,
        Period::ThirtyDays,
    ];

    /// Length of the period in whole seconds
    pub const fn seconds(self) -> i64 {
        match self {
            Period::FiveMinutes => 300,
            Period::TenMinutes => 600,
            Period::FifteenMinutes => 900,
            Period::ThirtyMinutes => 1_800,
            Period::OneHour => 3_600,
            Period::SixHours => 21_600,
            Period::TwelveHours => 43_200,
            Period::TwentyFourHours => 86_400,
            Period::TwoDays => 172_800,
            Period::SevenDays => 604_800,
            Period::ThirtyDays => 2_592_000,
        }
    }

    /// Short code, e.g. `"1h"`
    pub const fn code(self) -> &'static str {
        match self {
            Period::FiveMinutes => "5m",
            Period::TenMinutes => "10m",
            Period::FifteenMinutes => "15m",
            Period::ThirtyMinutes => "30m",
            Period::OneHour => "1h",
            Period::SixHours => "6h",
            Period::TwelveHours => "12h",
            Period::TwentyFourHours => "24h",
            Period::TwoDays => "2d",
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
        }
    }

    /// Human readable label, e.g. `"1 hour"`
    pub const fn label(self) -> &'static str {
        match self {
            Period::FiveMinutes => "5 minutes",
            Period::TenMinutes => "10 minutes",
            Period::FifteenMinutes => "15 minutes",
            Period::ThirtyMinutes => "30 minutes",
            Period::OneHour => "1 hour",
            Period::SixHours => "6 hours",
            Period::TwelveHours => "12 hours",
            Period::TwentyFourHours => "24 hours",
            Period::TwoDays => "2 days",
            Period::SevenDays => "7 days",
            Period::ThirtyDays => "30 days",
        }
    }

    /// Strict lookup by code
    pub fn from_code(code: &str) -> Option<Period> {
        let code = code.trim();
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Lookup by code, falling back to the default period
    pub fn from_code_or_default(code: &str) -> Period {
        Self::from_code(code).unwrap_or_default()
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The next longer period, or `self` if already the longest
    pub fn next(self) -> Period {
        let idx = (self.position() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// The next shorter period, or `self` if already the shortest
    pub fn prev(self) -> Period {
        Self::ALL[self.position().saturating_sub(1)]
    }
}

/// Duration of a period in seconds.
pub fn duration_of(period: Period) -> i64 {
    period.seconds()
}

/// Duration of a period given by its code; unknown codes yield
/// [`DEFAULT_PERIOD_SECONDS`].
pub fn duration_of_code(code: &str) -> i64 {
    Period::from_code(code).map_or(DEFAULT_PERIOD_SECONDS, Period::seconds)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Period {
    fn from(code: String) -> Self {
        Period::from_code_or_default(&code)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.code().to_string()
    }
}
