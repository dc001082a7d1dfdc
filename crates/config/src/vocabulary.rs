//! Vocabulary file loading
//!
//! Loads detection word lists from YAML. Every list is optional in the file;
//! missing lists keep the built-in defaults from `pondok_core::Vocabulary`.
//!
//! ```yaml
//! keywords: [spp, spb, sppu, sppp, "uang saku", saku]
//! triggers: [an, atas, nama, untuk, ananda, santri]
//! ```

use pondok_core::Vocabulary;
use std::path::Path;

use crate::{ConfigError, ExtractionConfig};

/// Load a vocabulary from a YAML file
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

    let vocabulary: Vocabulary =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if vocabulary.keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "keywords".to_string(),
            message: "At least one payment keyword is required".to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        keywords = vocabulary.keywords.len(),
        stopwords = vocabulary.stopwords.len(),
        "Loaded vocabulary file"
    );

    Ok(vocabulary)
}

/// Vocabulary for the configured extraction settings
///
/// Falls back to the built-in lists when no file is configured or the file
/// cannot be loaded.
pub fn resolve_vocabulary(config: &ExtractionConfig) -> Vocabulary {
    match &config.vocabulary_path {
        Some(path) => load_vocabulary(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "Using built-in vocabulary");
            Vocabulary::default()
        }),
        None => Vocabulary::default(),
    }
}
