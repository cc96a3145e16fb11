//! Configuration for the memomate cityscape.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/memomate/` on Linux). Every field is optional; a missing file
//! means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use memomate_core::{DayNightCycle, LayoutMode, TimeOfDay};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "memomate.log";

/// Errors raised while reading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Loading-screen timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Skip the loading screen entirely.
    pub skip: bool,
    /// Interval between progress increments, in milliseconds.
    pub tick_ms: u64,
    /// Time before the city replaces the loading screen, in milliseconds.
    pub duration_ms: u64,
    /// Upper bound of a single random progress increment, in percent.
    pub max_increment: f64,
    /// Fixed seed for the progress generator; random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            skip: false,
            tick_ms: 200,
            duration_ms: 4000,
            max_increment: 15.0,
            seed: None,
        }
    }
}

impl LoadingConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between day/night flips.
    pub cycle_period_secs: f64,
    /// Mode the cycle starts in.
    pub start_mode: TimeOfDay,
    /// Upper bound on the time between frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Terminal width, in columns, below which the list view is shown.
    pub compact_width: u16,
    /// Log file; defaults to the platform cache directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub loading: LoadingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycle_period_secs: DayNightCycle::DEFAULT_PERIOD.as_secs_f64(),
            start_mode: TimeOfDay::Night,
            frame_interval_ms: 33,
            compact_width: LayoutMode::DEFAULT_COMPACT_WIDTH,
            log_file: None,
            loading: LoadingConfig::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "memomate")
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Default location of the log file, if the platform has one.
    pub fn default_log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.cache_dir().join(LOG_FILE))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Reject settings the app cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cycle_period_secs.is_finite() || self.cycle_period_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cycle_period_secs must be positive, got {}",
                self.cycle_period_secs
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.loading.tick_ms == 0 {
            return Err(ConfigError::Invalid(
                "loading.tick_ms must be at least 1".to_string(),
            ));
        }
        if !self.loading.max_increment.is_finite() || self.loading.max_increment <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "loading.max_increment must be positive, got {}",
                self.loading.max_increment
            )));
        }
        Ok(())
    }

    /// The day/night cycle described by this configuration.
    pub fn cycle(&self) -> DayNightCycle {
        let period = Duration::try_from_secs_f64(self.cycle_period_secs)
            .unwrap_or(DayNightCycle::DEFAULT_PERIOD);
        DayNightCycle::new(self.start_mode, period)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// The log file to write to, falling back to the platform default.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cycle_period_secs, 30.0);
        assert_eq!(config.start_mode, TimeOfDay::Night);
        assert_eq!(config.compact_width, 80);
        assert_eq!(config.loading.tick(), Duration::from_millis(200));
        assert_eq!(config.loading.duration(), Duration::from_secs(4));
        assert_eq!(config.cycle().period(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            start_mode = "day"
            compact_width = 100

            [loading]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.start_mode, TimeOfDay::Day);
        assert_eq!(config.compact_width, 100);
        assert_eq!(config.loading.seed, Some(7));
        assert_eq!(config.loading.tick_ms, 200);
        assert_eq!(config.cycle_period_secs, 30.0);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("cycle_period_secs = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("frame_interval_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("start_mode = \"dusk\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.loading.seed = Some(42);
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/memomate/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
