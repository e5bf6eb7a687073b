//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub instance: InstanceConfig,
    pub session: SessionConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

/// Instance configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    /// Display name of this instance (e.g., "ReadVault")
    pub name: String,
    /// Email address that receives the administrator flag on login
    pub admin_email: String,
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Path to the serialized session record.
    /// Absent file means "no session".
    pub path: PathBuf,
}

/// Chat feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Seed the feed with the fixed welcome/sample entries
    #[serde(default = "default_true")]
    pub seed: bool,
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (READVAULT_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("instance.name", "ReadVault")?
            .set_default("instance.admin_email", "admin@readvault.com")?
            .set_default("session.path", "data/session.json")?
            .set_default("chat.seed", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (READVAULT_*)
            .add_source(
                Environment::with_prefix("READVAULT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.instance.admin_email.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "instance.admin_email must not be empty".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(crate::error::AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        Ok(())
    }
}
