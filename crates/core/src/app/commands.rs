use crate::domain::Period;

/// Which timestamp a copy command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Current,
    Future,
}

/// Commands the presentation layer sends to the clock session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stop following the wall clock
    Pause,

    /// Follow the wall clock again
    Resume,

    /// Back to the default period, running, at the current time
    Reset,

    /// Freeze at the current wall-clock time
    SetToCurrent,

    /// Select the period added to the base timestamp
    SetPeriod { period: Period },

    /// Freeze at a user-supplied timestamp
    SetBase { seconds: i64 },

    /// Copy a timestamp to the clipboard
    Copy { target: CopyTarget },

    /// Quit the application
    Quit,
}
