//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use pondok_config::{load_settings, Settings};
use pondok_persistence::PaymentHistory;
use pondok_text_processing::PaymentAnalyzer;

use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration wrapped in RwLock for hot-reload support
    pub config: Arc<RwLock<Settings>>,
    /// Current analyzer, rebuilt on config reload
    analyzer: Arc<RwLock<Arc<PaymentAnalyzer>>>,
    /// Accumulated payments; one append per analyzed message
    pub history: Arc<Mutex<PaymentHistory>>,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    /// Create application state, building the analyzer from settings
    pub fn new(config: Settings) -> Result<Self, ServerError> {
        Self::with_env(config, None)
    }

    /// Create application state with environment name for reload support
    pub fn with_env(config: Settings, env: Option<String>) -> Result<Self, ServerError> {
        let analyzer = PaymentAnalyzer::from_config(&config.extraction)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            analyzer: Arc::new(RwLock::new(Arc::new(analyzer))),
            history: Arc::new(Mutex::new(PaymentHistory::new())),
            env,
        })
    }

    /// Analyzer for the current configuration
    pub fn analyzer(&self) -> Arc<PaymentAnalyzer> {
        self.analyzer.read().clone()
    }

    /// Reload configuration from files and rebuild the analyzer
    ///
    /// The history is kept. On failure the previous configuration stays active.
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let new_config = load_settings(self.env.as_deref())
            .map_err(|e| ServerError::Config(format!("Failed to reload config: {}", e)))?;
        let analyzer = PaymentAnalyzer::from_config(&new_config.extraction)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        *self.analyzer.write() = Arc::new(analyzer);
        *self.config.write() = new_config;

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }
}
