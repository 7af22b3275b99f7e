//! The typed adjacency contract and its in-memory implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single directed edge: relation label plus object entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub relation: String,
    pub object: String,
}

impl Edge {
    pub fn new(relation: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            object: object.into(),
        }
    }
}

/// Explicit adjacency contract for graph accumulation.
///
/// Keeps the storage backend swappable: consumers append edges and read
/// subjects and edge lists without reaching into any internal structure.
pub trait GraphStore: std::fmt::Debug {
    /// Append `(relation, object)` to the edge list keyed by `subject`,
    /// creating the key if absent. Repeated identical triples produce
    /// repeated edges.
    fn upsert(&mut self, subject: &str, relation: &str, object: &str);

    /// The ordered edge list for a subject; empty if the subject is absent.
    fn edges_of(&self, subject: &str) -> &[Edge];

    /// All subjects in insertion order.
    fn subjects(&self) -> Vec<&str>;

    /// Total distinct subjects.
    fn subject_count(&self) -> usize;

    /// Total edge count (sum of per-subject edge-list lengths).
    fn edge_count(&self) -> usize;
}

/// Serialized form of [`MemoryGraph`]: an ordered list of subject records so
/// round-trips preserve insertion order exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubjectRecord {
    subject: String,
    edges: Vec<Edge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
struct GraphRecord {
    subjects: Vec<SubjectRecord>,
}

/// In-memory subject-keyed adjacency structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "GraphRecord", into = "GraphRecord")]
pub struct MemoryGraph {
    order: Vec<String>,
    adjacency: HashMap<String, Vec<Edge>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate subjects with their edge lists, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Edge])> {
        self.order.iter().map(|subject| {
            (
                subject.as_str(),
                self.adjacency
                    .get(subject)
                    .map(|edges| edges.as_slice())
                    .unwrap_or(&[]),
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl GraphStore for MemoryGraph {
    fn upsert(&mut self, subject: &str, relation: &str, object: &str) {
        if !self.adjacency.contains_key(subject) {
            self.order.push(subject.to_string());
        }
        self.adjacency
            .entry(subject.to_string())
            .or_default()
            .push(Edge::new(relation, object));
    }

    fn edges_of(&self, subject: &str) -> &[Edge] {
        self.adjacency
            .get(subject)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    fn subjects(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    fn subject_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl From<GraphRecord> for MemoryGraph {
    fn from(record: GraphRecord) -> Self {
        let mut graph = MemoryGraph::new();
        for subject in record.subjects {
            graph.order.push(subject.subject.clone());
            graph.adjacency.insert(subject.subject, subject.edges);
        }
        graph
    }
}

impl From<MemoryGraph> for GraphRecord {
    fn from(graph: MemoryGraph) -> Self {
        let mut subjects = Vec::with_capacity(graph.order.len());
        let mut adjacency = graph.adjacency;
        for subject in graph.order {
            let edges = adjacency.remove(&subject).unwrap_or_default();
            subjects.push(SubjectRecord { subject, edges });
        }
        GraphRecord { subjects }
    }
}
