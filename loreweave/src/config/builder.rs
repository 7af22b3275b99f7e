//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::{Path, PathBuf};

/// Builder for creating LoreweaveConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: LoreweaveConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: LoreweaveConfig::default(),
        }
    }

    /// Create a builder preconfigured with a home-directory data dir.
    pub fn defaults() -> Self {
        Self::new().with_default_storage()
    }

    /// Set the base data directory.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.storage.data_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the snapshot directory (relative to the data directory).
    pub fn with_snapshot_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.storage.snapshots = path.as_ref().to_path_buf();
        self
    }

    /// Set the document directory (relative to the data directory).
    pub fn with_document_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.storage.documents = path.as_ref().to_path_buf();
        self
    }

    /// Use the default storage layout under `~/.loreweave/data`.
    pub fn with_default_storage(mut self) -> Self {
        if self.config.storage.data_dir == PathBuf::from("./data") {
            let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            self.config.storage.data_dir = home_dir.join(".loreweave").join("data");
        }
        self
    }

    /// Set the similarity threshold for entity linking (0-100 scale).
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.resolution.similarity_threshold = threshold;
        self
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: Vec<AliasPair>) -> Self {
        self.config.resolution.aliases = aliases;
        self
    }

    /// Set the cap on triples requested per chunk.
    pub fn with_max_triplets(mut self, cap: usize) -> Self {
        self.config.extraction.max_triplets_per_chunk = cap;
        self
    }

    /// Replace the entity gazetteer embedded in the extraction prompt.
    pub fn with_entity_gazetteer<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extraction.entity_gazetteer = entities.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the relation gazetteer embedded in the extraction prompt.
    pub fn with_relation_gazetteer<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extraction.relation_gazetteer =
            relations.into_iter().map(Into::into).collect();
        self
    }

    /// Set the completion model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.completion.model = model.into();
        self
    }

    /// Set the completion service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.completion.endpoint = endpoint.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Validate and produce the final configuration.
    pub fn build(self) -> Result<LoreweaveConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
