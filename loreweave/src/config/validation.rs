//! Configuration validation.

use super::{ConfigError, Result, models::LoreweaveConfig};

/// Validate a complete configuration, returning the first problem found.
pub fn validate_config(config: &LoreweaveConfig) -> Result<()> {
    let threshold = config.resolution.similarity_threshold;
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ConfigError::ValidationError(format!(
            "similarity_threshold must be within 0-100, got {}",
            threshold
        )));
    }

    if config.extraction.max_triplets_per_chunk == 0 {
        return Err(ConfigError::ValidationError(
            "max_triplets_per_chunk must be greater than 0".to_string(),
        ));
    }

    if config.completion.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "completion endpoint must not be empty".to_string(),
        ));
    }

    if config.completion.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "completion model must not be empty".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.completion.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "temperature must be within 0-2, got {}",
            config.completion.temperature
        )));
    }

    for pair in &config.resolution.aliases {
        if pair.alias.trim().is_empty() || pair.canonical.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "alias entries must have nonempty alias and canonical names".to_string(),
            ));
        }
    }

    Ok(())
}
