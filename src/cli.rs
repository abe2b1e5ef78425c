use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use unixtime_core::{Period, from_editable_local};

#[derive(Debug, Error, PartialEq)]
#[error("expected epoch seconds or YYYY-MM-DDTHH:MM:SS, got {0:?}")]
pub struct TimeArgError(String);

/// Accepts either epoch seconds or the editable local date-time shape
pub fn parse_time_arg(value: &str) -> Result<i64, TimeArgError> {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| from_editable_local(trimmed))
        .map_err(|_| TimeArgError(value.to_string()))
}

fn parse_period_arg(value: &str) -> Result<Period, std::convert::Infallible> {
    Ok(Period::from_code_or_default(value))
}

#[derive(Parser, Debug, PartialEq)]
#[command(name = "unixtime")]
#[command(about = "UNIX Time Helper - the current UNIX timestamp and a future one a chosen period ahead")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Period to add: 5m, 10m, 15m, 30m, 1h, 6h, 12h, 24h, 2d, 7d or 30d
    #[arg(long, value_parser = parse_period_arg)]
    pub period: Option<Period>,

    /// Start frozen at this time (epoch seconds or YYYY-MM-DDTHH:MM:SS local)
    #[arg(long, value_parser = parse_time_arg)]
    pub at: Option<i64>,

    /// Start paused at the current time
    #[arg(long)]
    pub paused: bool,

    /// Print the timestamps once and exit instead of opening the TUI
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["unixtime"]);
        assert_eq!(args.config, None);
        assert_eq!(args.period, None);
        assert_eq!(args.at, None);
        assert!(!args.paused);
        assert!(!args.once);
    }

    #[test]
    fn test_cli_parse_period_and_config() {
        let args = CliArgs::parse_from([
            "unixtime",
            "--period", "1h",
            "--config", "/custom/config.toml",
        ]);
        assert_eq!(args.period, Some(Period::OneHour));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_unknown_period_falls_back() {
        let args = CliArgs::parse_from(["unixtime", "--period", "3w"]);
        assert_eq!(args.period, Some(Period::TwentyFourHours));
    }

    #[test]
    fn test_cli_at_epoch_seconds() {
        let args = CliArgs::parse_from(["unixtime", "--at", "2000", "--once"]);
        assert_eq!(args.at, Some(2000));
        assert!(args.once);
    }

    #[test]
    fn test_cli_rejects_garbage_time() {
        let result = CliArgs::try_parse_from(["unixtime", "--at", "not-a-date"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_time_arg_editable_shape() {
        let expected = from_editable_local("2024-03-09T14:05:07").expect("valid local time");
        assert_eq!(parse_time_arg("2024-03-09T14:05:07"), Ok(expected));
        assert_eq!(parse_time_arg("-5"), Ok(-5));
    }
}
