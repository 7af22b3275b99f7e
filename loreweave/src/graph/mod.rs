//! Graph accumulation, inspection, and persistence.
//!
//! The graph is a mapping from canonical subject string to an ordered list
//! of (relation, object) edges. Multiple identical edges may coexist; no
//! deduplication is performed. Insertion order is preserved both for
//! subjects and within each subject's edge list.

mod inspect;
mod snapshot;
mod store;

pub use inspect::{GraphReport, SAMPLE_EDGES, SAMPLE_SUBJECTS, SubjectSample, inspect};
pub use snapshot::{GRAPH_FILE, SnapshotError, SnapshotStore};
pub use store::{Edge, GraphStore, MemoryGraph};
