//! Configuration management for the confidence gate.

use serde::{Deserialize, Serialize};

use crate::drift::DriftConfig;
use crate::error::GateResult;
use crate::scope::GatingConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gating: GatingConfig,
    #[serde(default)]
    pub drift: DriftConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{CONFIDENCE_GATE_ENV}.toml (environment-specific)
    /// 3. Environment variables with CONFIDENCE_GATE prefix
    pub fn load() -> GateResult<Self> {
        let env =
            std::env::var("CONFIDENCE_GATE_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("CONFIDENCE_GATE").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration for testing and development.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Validate all sections.
    pub fn validate(&self) -> GateResult<()> {
        self.gating.validate()?;
        self.drift.validate()?;
        Ok(())
    }
}

/// Notification delivery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Channel receiving moderate-confidence warnings
    pub channel: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel: "#gpu-alerts".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
