// TOML config adapter - Configuration management using TOML files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{EzffError, EzffResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ezff.toml";

/// Effective application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Media-processing binary
    pub ffmpeg: String,
    /// Duration-probing binary
    pub ffprobe: String,
    /// Appended to the input file stem when no output is given
    pub suffix: String,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        let logging = LoggingConfig::default();
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            suffix: "_trim".to_string(),
            log_level: logging.level,
            log_format: logging.format,
        }
    }
}

/// Values that take precedence over the file (command line and environment)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub ffmpeg: Option<String>,
    pub ffprobe: Option<String>,
    pub suffix: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    ezff: AppConfig,
}

impl AppConfig {
    /// Apply overrides on top of the current values
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(ffmpeg) = overrides.ffmpeg {
            self.ffmpeg = ffmpeg;
        }
        if let Some(ffprobe) = overrides.ffprobe {
            self.ffprobe = ffprobe;
        }
        if let Some(suffix) = overrides.suffix {
            self.suffix = suffix;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> EzffResult<()> {
        if self.ffmpeg.trim().is_empty() {
            return Err(config_error("ffmpeg program must not be empty"));
        }
        if self.ffprobe.trim().is_empty() {
            return Err(config_error("ffprobe program must not be empty"));
        }
        if self.suffix.is_empty() {
            return Err(config_error("output suffix must not be empty"));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(config_error(format!(
                "output suffix '{}' must not contain path separators",
                self.suffix
            )));
        }
        Ok(())
    }

    /// Logging section of the configuration
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
        }
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load settings from `explicit` if given, else from [`DEFAULT_CONFIG_FILE`]
    /// in the working directory if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> EzffResult<AppConfig> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    debug!("No configuration file, using defaults");
                    Ok(AppConfig::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> EzffResult<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)
            .map_err(|e| config_error(format!("{}: {}", path.display(), e)))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<AppConfig, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.ezff)
    }
}

fn config_error(message: impl Into<String>) -> EzffError {
    EzffError::Config {
        message: message.into(),
    }
}
