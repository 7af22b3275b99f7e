//! Read-only graph diagnostics.

use super::store::{Edge, GraphStore};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Maximum subjects included in a report sample.
pub const SAMPLE_SUBJECTS: usize = 5;

/// Maximum edges included per sampled subject.
pub const SAMPLE_EDGES: usize = 5;

/// A bounded sample of one subject's edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectSample {
    pub subject: String,
    pub edges: Vec<Edge>,

    /// Edges beyond the sample bound, not shown
    pub elided: usize,
}

/// Subject and edge counts plus a bounded structural sample.
///
/// Produced before and after resolution to make its effect observable:
/// resolution only merges clusters, so the subject count can decrease or
/// stay equal across it, never increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub subject_count: usize,
    pub edge_count: usize,
    pub sample: Vec<SubjectSample>,
}

/// Compute a diagnostic report over a graph. Never mutates the graph.
pub fn inspect<G: GraphStore + ?Sized>(graph: &G) -> GraphReport {
    let subjects = graph.subjects();
    let sample = subjects
        .iter()
        .take(SAMPLE_SUBJECTS)
        .map(|subject| {
            let edges = graph.edges_of(subject);
            SubjectSample {
                subject: subject.to_string(),
                edges: edges.iter().take(SAMPLE_EDGES).cloned().collect(),
                elided: edges.len().saturating_sub(SAMPLE_EDGES),
            }
        })
        .collect();

    GraphReport {
        subject_count: graph.subject_count(),
        edge_count: graph.edge_count(),
        sample,
    }
}

impl GraphReport {
    /// Log the report through tracing, one line per fact.
    pub fn log(&self, stage: &str) {
        info!(stage, subjects = self.subject_count, "Total subjects in graph");

        if self.subject_count == 0 {
            warn!(stage, "The graph is empty; no entities or relationships were extracted");
            return;
        }

        info!(stage, edges = self.edge_count, "Total relationships in graph");
        for sample in &self.sample {
            info!(stage, subject = %sample.subject, "Subject");
            for edge in &sample.edges {
                info!(stage, "  - {} -> {}", edge.relation, edge.object);
            }
            if sample.elided > 0 {
                info!(stage, "  ... and {} more relations", sample.elided);
            }
        }
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total subjects in graph: {}", self.subject_count)?;
        writeln!(f, "Total relationships in graph: {}", self.edge_count)?;
        for sample in &self.sample {
            writeln!(f, "Subject: {}", sample.subject)?;
            for edge in &sample.edges {
                writeln!(f, "  - {} -> {}", edge.relation, edge.object)?;
            }
            if sample.elided > 0 {
                writeln!(f, "  ... and {} more relations", sample.elided)?;
            }
        }
        Ok(())
    }
}
