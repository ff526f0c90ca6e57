//! Configuration management
//!
//! Handles loading and validation of configuration from:
//! - TOML files
//! - CLI arguments (probe binary)

use anyhow::{bail, Context, Result};
use paste_input_core::TempStage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Transport configuration
    #[serde(default)]
    pub transport: TransportConfig,

    /// Temp-file staging configuration
    #[serde(default)]
    pub staging: StagingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which host transport surface to expose
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Selected transport variant
    #[serde(default)]
    pub variant: TransportVariant,
}

/// The two host transport generations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportVariant {
    /// Typed request/response stub with a paste-detected push (current)
    #[default]
    StubApi,

    /// Legacy method channel + event stream, images delivered as temp paths
    EventChannel,
}

/// Temp-file staging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Staging directory override; defaults to the OS temp directory
    pub dir: Option<PathBuf>,

    /// Sweep leftover staged files at startup
    #[serde(default)]
    pub sweep_on_start: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.staging.dir {
            if !dir.is_dir() {
                bail!("staging.dir does not exist: {}", dir.display());
            }
        }
        Ok(())
    }

    /// Build the temp stage described by this configuration
    pub fn stage(&self) -> TempStage {
        match &self.staging.dir {
            Some(dir) => TempStage::with_dir(dir),
            None => TempStage::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.transport.variant, TransportVariant::StubApi);
        assert!(config.staging.dir.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.transport.variant, TransportVariant::StubApi);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [transport]
            variant = "event-channel"

            [staging]
            sweep_on_start = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.transport.variant, TransportVariant::EventChannel);
        assert!(config.staging.sweep_on_start);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_missing_staging_dir() {
        let config = Config {
            staging: StagingConfig {
                dir: Some(PathBuf::from("/nonexistent/staging")),
                sweep_on_start: false,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stage_uses_configured_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config {
            staging: StagingConfig {
                dir: Some(tmp.path().to_path_buf()),
                sweep_on_start: false,
            },
            ..Default::default()
        };
        assert_eq!(config.stage().dir(), tmp.path());
    }
}
