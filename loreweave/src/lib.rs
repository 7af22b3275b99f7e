//! # Loreweave
//!
//! Turns unstructured narrative text into a directed knowledge graph of
//! (subject, relation, object) facts. A completion service proposes candidate
//! facts for each document; a deterministic resolution layer merges alternate
//! spellings of the same real-world entity into one canonical node before the
//! facts are accumulated into a subject-keyed adjacency graph.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use loreweave::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigBuilder::defaults().build()?;
//!     loreweave::logging::init(&config.logging)?;
//!
//!     let client = Arc::new(OpenAiClient::from_config(&config.completion)?);
//!     let documents = DirectoryReader::new("./data").load()?;
//!
//!     let mut pipeline = GraphPipeline::new(client, &config);
//!     let (graph, report) = pipeline.build(&documents).await?;
//!     println!("{} subjects, {} edges", graph.subject_count(), graph.edge_count());
//!
//!     let store = SnapshotStore::create_timestamped(&config.storage.snapshot_dir())?;
//!     store.save(&graph)?;
//!     println!("{} diagnostics recorded", report.diagnostics.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **extraction**: prompt construction and parsing of completion output
//!   into raw triplets, with structured diagnostics for malformed lines.
//! - **resolution**: fuzzy entity linking (first-match over an
//!   insertion-ordered cluster table) plus static alias canonicalization.
//! - **graph**: the typed adjacency contract, an in-memory implementation,
//!   a read-only inspector, and directory-based snapshots.
//! - **pipeline**: single-threaded orchestration across a document set.

pub mod completion;
pub mod config;
pub mod documents;
pub mod extraction;
pub mod graph;
pub mod logging;
pub mod pipeline;
pub mod resolution;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::completion::{CompletionClient, CompletionError, OpenAiClient};
    pub use crate::config::{ConfigBuilder, ConfigLoader, LoreweaveConfig};
    pub use crate::documents::{DirectoryReader, Document, DocumentSource};
    pub use crate::extraction::{
        Diagnostic, ExtractionReport, PromptTemplate, Triplet, TripletExtractor,
    };
    pub use crate::graph::{
        Edge, GraphReport, GraphStore, MemoryGraph, SnapshotStore, inspect,
    };
    pub use crate::pipeline::{BuildReport, GraphPipeline};
    pub use crate::resolution::{AliasTable, EntityResolver, LinkDecision};

    pub use crate::{LoreweaveError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Loreweave operations
#[derive(Debug, thiserror::Error)]
pub enum LoreweaveError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Failure of the external completion service. Fatal for the current
    /// document; no retry or backoff is attempted.
    #[error("Completion service error: {0}")]
    Completion(#[from] crate::completion::CompletionError),

    /// Error loading documents
    #[error("Document error: {0}")]
    Document(#[from] crate::documents::DocumentError),

    /// Error reading or writing a graph snapshot
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] crate::graph::SnapshotError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for LoreweaveError {
    fn from(err: crate::config::ConfigError) -> Self {
        LoreweaveError::Configuration(err.to_string())
    }
}

/// Result type for Loreweave operations
pub type Result<T> = std::result::Result<T, LoreweaveError>;
