//! Directory-based graph snapshots.
//!
//! A snapshot is a directory holding a single JSON file with the full
//! graph. Persistence is all-or-nothing: the graph is written wholesale
//! once a run completes and loaded wholesale at the start of the next.

use super::store::MemoryGraph;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the graph payload inside a snapshot directory.
pub const GRAPH_FILE: &str = "graph.json";

const TIMESTAMP_FORMAT: &str = "%m_%d_%Y_%H_%M";

/// Error type for snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Loads and saves graph snapshots rooted at one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Use an existing (or to-be-created) snapshot directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Create a store rooted at a fresh timestamped directory under `base`.
    pub fn create_timestamped(base: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let dir = base
            .as_ref()
            .join(Local::now().format(TIMESTAMP_FORMAT).to_string());
        fs::create_dir_all(&dir).map_err(|source| SnapshotError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Find the most recently modified snapshot directory under `base`.
    ///
    /// Returns `None` when `base` does not exist or holds no snapshots;
    /// both are the normal "build a new graph from scratch" branch.
    pub fn latest(base: impl AsRef<Path>) -> Result<Option<Self>, SnapshotError> {
        let base = base.as_ref();
        if !base.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(base).map_err(|source| SnapshotError::Io {
            path: base.to_path_buf(),
            source,
        })?;

        let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() || !path.join(GRAPH_FILE).is_file() {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            if newest.as_ref().is_none_or(|(when, _)| modified > *when) {
                newest = Some((modified, path));
            }
        }

        Ok(newest.map(|(_, path)| Self::new(path)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the snapshot, or `None` when it is missing.
    pub fn load(&self) -> Result<Option<MemoryGraph>, SnapshotError> {
        let path = self.dir.join(GRAPH_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&path).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;
        let graph: MemoryGraph = serde_json::from_str(&payload)?;

        info!(path = %path.display(), "Loaded graph snapshot");
        Ok(Some(graph))
    }

    /// Write the whole graph, creating the directory if needed.
    pub fn save(&self, graph: &MemoryGraph) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(GRAPH_FILE);
        let payload = serde_json::to_string_pretty(graph)?;
        fs::write(&path, payload).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "Saved graph snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    fn sample_graph() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        graph.upsert("Melkor", "ruled", "Angband");
        graph.upsert("Melkor", "destroyed", "Beleriand");
        graph.upsert("Eru", "created", "Arda");
        // duplicate edge must survive the round trip
        graph.upsert("Eru", "created", "Arda");
        graph
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("snap"));

        let graph = sample_graph();
        store.save(&graph).unwrap();
        let restored = store.load().unwrap().unwrap();

        assert_eq!(restored, graph);
        assert_eq!(restored.subjects(), vec!["Melkor", "Eru"]);
        assert_eq!(restored.edges_of("Eru").len(), 2);
    }

    #[test]
    fn missing_snapshot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("absent"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn latest_finds_newest_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let older = SnapshotStore::new(dir.path().join("older"));
        older.save(&sample_graph()).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(20));

        let newer = SnapshotStore::new(dir.path().join("newer"));
        newer.save(&MemoryGraph::new()).unwrap();

        let found = SnapshotStore::latest(dir.path()).unwrap().unwrap();
        assert_eq!(found.dir(), newer.dir());
    }

    #[test]
    fn latest_on_missing_base_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = SnapshotStore::latest(dir.path().join("nothing")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn create_timestamped_makes_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::create_timestamped(dir.path()).unwrap();
        assert!(store.dir().is_dir());
        assert!(store.dir().starts_with(dir.path()));
    }
}
