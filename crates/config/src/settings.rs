//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{env, extraction, server};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Keyword detection and extraction tuning
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_extraction()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_extraction(&self) -> Result<(), ConfigError> {
        let extraction = &self.extraction;

        if !(0.0..=1.0).contains(&extraction.similarity_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "extraction.similarity_threshold".to_string(),
                message: format!(
                    "Must be between 0.0 and 1.0, got {}",
                    extraction.similarity_threshold
                ),
            });
        }

        if extraction.window_after == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.window_after".to_string(),
                message: "Window must include the keyword itself (minimum 1)".to_string(),
            });
        }

        if let Some(path) = &extraction.vocabulary_path {
            if !Path::new(path).exists() {
                if self.environment.is_production() {
                    return Err(ConfigError::FileNotFound(path.clone()));
                }
                tracing::warn!(path = %path, "Vocabulary file not found, defaults will be used");
            }
        }

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.environment.is_production() && server.cors_enabled && server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 Only {} will be allowed.",
                server::DEFAULT_CORS_ORIGIN
            );
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    server::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    server::DEFAULT_PORT
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Extraction tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum keyword similarity ratio
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Tokens kept before the keyword
    #[serde(default = "default_window_before")]
    pub window_before: usize,

    /// Window end offset after the keyword (exclusive)
    #[serde(default = "default_window_after")]
    pub window_after: usize,

    /// Optional YAML file replacing the built-in word lists
    #[serde(default)]
    pub vocabulary_path: Option<String>,
}

fn default_similarity_threshold() -> f64 {
    extraction::SIMILARITY_THRESHOLD
}

fn default_window_before() -> usize {
    extraction::WINDOW_BEFORE
}

fn default_window_after() -> usize {
    extraction::WINDOW_AFTER
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            window_before: default_window_before(),
            window_after: default_window_after(),
            vocabulary_path: None,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env_name: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env_name {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
