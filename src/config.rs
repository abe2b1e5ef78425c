use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use unixtime_core::Period;

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct ClockConfig {
    /// Period selected right after start-up
    pub initial_period: Period,
    pub start_paused: bool,
    /// Start frozen at this timestamp; only ever set from the command line
    #[serde(skip)]
    pub start_at: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub show_utc: bool,
    /// How long the "copied" acknowledgment stays visible
    pub copied_feedback_ms: u64,
    /// Replaces the detected local zone label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_label: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            clock: ClockConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_period: Period::default(),
            start_paused: false,
            start_at: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_utc: true,
            copied_feedback_ms: 1500,
            zone_label: None,
        }
    }
}

impl UiConfig {
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "unixtime")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("unixtime.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_cli(&mut self, cli_args: &CliArgs) {
        if let Some(period) = cli_args.period {
            self.clock.initial_period = period;
        }
        if cli_args.paused {
            self.clock.start_paused = true;
        }
        if cli_args.at.is_some() {
            self.clock.start_at = cli_args.at;
        }
    }

    pub fn from_cli_and_file(cli_args: &CliArgs, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load(config_path)?;

        // CLI args override config file
        config.apply_cli(cli_args);

        Ok(config)
    }
}
