//! Centralized constants for payment detection
//!
//! Single source of truth for tunable defaults. Settings fall back to these
//! values when a field is missing from config files and environment.

/// Keyword detection and window extraction
pub mod extraction {
    /// Minimum similarity ratio for a token to count as a payment keyword.
    ///
    /// Admits minor typos ("sppu", "sakku") while rejecting unrelated short words.
    pub const SIMILARITY_THRESHOLD: f64 = 0.78;

    /// Tokens kept before the keyword in the extraction window
    pub const WINDOW_BEFORE: usize = 5;

    /// Window end offset after the keyword (exclusive)
    pub const WINDOW_AFTER: usize = 7;
}

/// HTTP shell defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
}

/// Environment variable names
pub mod env {
    /// Selects `config/{env}` on top of `config/default`
    pub const ENVIRONMENT: &str = "PONDOK_ENV";

    /// Prefix for per-field overrides, e.g. `PONDOK__SERVER__PORT=9000`
    pub const PREFIX: &str = "PONDOK";
}
