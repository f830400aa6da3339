use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod gateway;

pub use gateway::{AimSettings, GatewayMode};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub gateway: AimSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: match env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "text".to_string())
                    .to_lowercase()
                    .as_str()
                {
                    "text" => LogFormat::Text,
                    "json" => LogFormat::Json,
                    _ => return Err(AppError::Configuration("Invalid LOG_FORMAT".to_string())),
                },
            },
            gateway: AimSettings::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.env == "production" && self.gateway.mode.is_sandbox() {
            tracing::warn!("Production environment is configured against the sandbox gateway");
        }

        self.gateway.validate()
    }
}
