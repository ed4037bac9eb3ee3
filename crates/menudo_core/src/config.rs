//! Runtime configuration resolved from the host environment.
//!
//! # Responsibility
//! - Parse and normalize logging level and directory inputs.
//! - Resolve `MENUDO_LOG_LEVEL` / `MENUDO_LOG_DIR` with build-mode defaults.
//!
//! # Invariants
//! - A resolved `LoggingConfig` always carries an absolute directory.
//! - Level names are case-insensitive; `warning` is accepted as `warn`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LOG_LEVEL_ENV: &str = "MENUDO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "MENUDO_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "menudo-logs";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Log verbosity accepted by the file logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::UnsupportedLevel(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `debug` for debug builds, `info` for release builds.
    pub fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

/// Logging bootstrap settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    /// Builds a config from raw caller input.
    ///
    /// # Errors
    /// - `UnsupportedLevel` for unknown level names.
    /// - `EmptyLogDir` / `RelativeLogDir` for unusable directories.
    pub fn new(level: &str, log_dir: &str) -> ConfigResult<Self> {
        Ok(Self {
            level: LogLevel::parse(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Resolves settings from process environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults for
    /// unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let level = match non_blank(lookup(LOG_LEVEL_ENV)) {
            Some(raw) => LogLevel::parse(&raw)?,
            None => LogLevel::default_for_build(),
        };
        let log_dir = match non_blank(lookup(LOG_DIR_ENV)) {
            Some(raw) => normalize_log_dir(&raw)?,
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        };
        Ok(Self { level, log_dir })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn normalize_log_dir(log_dir: &str) -> ConfigResult<PathBuf> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}
