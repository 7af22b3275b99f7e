//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Loreweave
//! components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Loreweave.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoreweaveConfig {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Triplet extraction configuration
    pub extraction: ExtractionConfig,

    /// Entity resolution configuration
    pub resolution: ResolutionConfig,

    /// Completion service configuration
    pub completion: CompletionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for on-disk data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory for data
    pub data_dir: PathBuf,

    /// Directory holding graph snapshots (relative to data_dir)
    pub snapshots: PathBuf,

    /// Directory holding source documents (relative to data_dir)
    pub documents: PathBuf,
}

impl StorageConfig {
    /// Absolute path of the snapshot directory.
    pub fn snapshot_dir(&self) -> PathBuf {
        self.data_dir.join(&self.snapshots)
    }

    /// Absolute path of the document directory.
    pub fn document_dir(&self) -> PathBuf {
        self.data_dir.join(&self.documents)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = directories::ProjectDirs::from("org", "loreweave", "loreweave")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"));

        Self {
            data_dir,
            snapshots: PathBuf::from("snapshots"),
            documents: PathBuf::from("documents"),
        }
    }
}

/// Configuration for triplet extraction.
///
/// The gazetteers are embedded in the extraction prompt to bias the
/// completion service toward notable names; they are never used to validate
/// its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Cap on the number of triples requested per chunk
    pub max_triplets_per_chunk: usize,

    /// Notable entity names to call out in the prompt
    pub entity_gazetteer: Vec<String>,

    /// Notable relation verbs to call out in the prompt
    pub relation_gazetteer: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_triplets_per_chunk: 25,
            entity_gazetteer: Vec::new(),
            relation_gazetteer: [
                "created",
                "ruled",
                "fought against",
                "allied with",
                "descended from",
                "possessed",
                "destroyed",
                "resided in",
                "journeyed to",
                "married",
                "betrayed",
                "swore oath to",
                "crafted",
                "guarded",
                "taught",
                "learned from",
                "imprisoned",
                "rescued",
                "cursed",
                "blessed",
                "counseled",
                "served",
                "challenged",
                "defeated",
                "fled from",
                "pursued",
                "corrupted",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// A single known alternate name and the canonical name it collapses to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasPair {
    /// Alternate surface form (matched case-insensitively)
    pub alias: String,

    /// Canonical name the alias maps to
    pub canonical: String,
}

impl AliasPair {
    pub fn new(alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            canonical: canonical.into(),
        }
    }
}

/// Configuration for entity resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Similarity score (0-100 scale) an existing cluster must strictly
    /// exceed for a new entity to be linked to it
    pub similarity_threshold: f64,

    /// Known alternate names applied after fuzzy resolution
    pub aliases: Vec<AliasPair>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 80.0,
            aliases: vec![
                AliasPair::new("morgoth", "melkor"),
                AliasPair::new("gorthaur", "sauron"),
                AliasPair::new("mithrandir", "gandalf"),
                AliasPair::new("olórin", "gandalf"),
                AliasPair::new("elessar", "aragorn"),
                AliasPair::new("elfstone", "aragorn"),
                AliasPair::new("tharkûn", "gandalf"),
                AliasPair::new("incánus", "gandalf"),
            ],
        }
    }
}

/// Configuration for the external completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible API
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
