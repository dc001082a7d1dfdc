//! Configuration management for pondok payment detection
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (`PONDOK__` prefix, `__` separator)
//! - A vocabulary YAML file replacing the built-in word lists

pub mod constants;
pub mod settings;
pub mod vocabulary;

pub use settings::{
    load_settings, ExtractionConfig, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};
pub use vocabulary::{load_vocabulary, resolve_vocabulary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
