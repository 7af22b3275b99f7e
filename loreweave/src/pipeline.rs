//! End-to-end knowledge-graph construction.
//!
//! Documents are processed one at a time, synchronously; the only suspension
//! point is the blocking completion call. Raw triplets are first accumulated
//! into a raw graph, then the whole graph is entity-linked: fuzzy resolution
//! of subject and object, alias canonicalization of both, and accumulation
//! into the final graph. The raw and linked graphs are both inspected so the
//! effect of resolution is observable.

use crate::Result;
use crate::completion::CompletionClient;
use crate::config::LoreweaveConfig;
use crate::documents::Document;
use crate::extraction::{Diagnostic, TripletExtractor};
use crate::graph::{GraphReport, GraphStore, MemoryGraph, inspect};
use crate::resolution::{AliasTable, EntityResolver};
use std::sync::Arc;
use tracing::info;

/// Summary of one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Documents processed
    pub documents: usize,

    /// Valid triplets extracted across all documents
    pub triplets: usize,

    /// Inspection of the graph before entity resolution
    pub raw: GraphReport,

    /// Inspection of the graph after resolution and canonicalization
    pub linked: GraphReport,

    /// Diagnostics accumulated across all documents
    pub diagnostics: Vec<Diagnostic>,
}

/// Orchestrates extraction, resolution, canonicalization, and accumulation.
///
/// The entity table is local to one pipeline value; a fresh pipeline starts
/// a fresh resolution pass unless seeded from a previously persisted graph.
#[derive(Debug)]
pub struct GraphPipeline {
    extractor: TripletExtractor,
    resolver: EntityResolver,
    aliases: AliasTable,
}

impl GraphPipeline {
    pub fn new(client: Arc<dyn CompletionClient>, config: &LoreweaveConfig) -> Self {
        Self {
            extractor: TripletExtractor::new(client, &config.extraction),
            resolver: EntityResolver::from_config(&config.resolution),
            aliases: AliasTable::from_config(&config.resolution),
        }
    }

    /// Assemble a pipeline from explicit components.
    pub fn with_components(
        extractor: TripletExtractor,
        resolver: EntityResolver,
        aliases: AliasTable,
    ) -> Self {
        Self {
            extractor,
            resolver,
            aliases,
        }
    }

    /// Build a fresh graph from a document set.
    pub async fn build(&mut self, documents: &[Document]) -> Result<(MemoryGraph, BuildReport)> {
        self.build_onto(documents, MemoryGraph::new()).await
    }

    /// Continue building onto a previously persisted graph.
    ///
    /// Existing subjects and objects are registered as resolution clusters,
    /// in graph order, so entities from new documents link against them.
    pub async fn build_onto(
        &mut self,
        documents: &[Document],
        existing: MemoryGraph,
    ) -> Result<(MemoryGraph, BuildReport)> {
        for (subject, edges) in existing.iter() {
            self.resolver.seed([subject]);
            self.resolver.seed(edges.iter().map(|edge| edge.object.as_str()));
        }

        let mut raw = MemoryGraph::new();
        let mut diagnostics = Vec::new();
        let mut triplets = 0usize;

        for document in documents {
            info!(document = %document.id, "Processing document");
            let report = self.extractor.extract(document).await?;

            triplets += report.triplets.len();
            for triplet in &report.triplets {
                raw.upsert(&triplet.subject, &triplet.relation, &triplet.object);
            }
            diagnostics.extend(report.diagnostics);
        }

        info!(total = triplets, "Total triplets extracted");

        let raw_report = inspect(&raw);
        raw_report.log("raw");

        info!("Performing entity linking");
        let mut linked = existing;
        self.link_into(&raw, &mut linked);

        let linked_report = inspect(&linked);
        linked_report.log("linked");

        let report = BuildReport {
            documents: documents.len(),
            triplets,
            raw: raw_report,
            linked: linked_report,
            diagnostics,
        };

        Ok((linked, report))
    }

    /// Re-key an accumulated raw graph through fuzzy resolution and alias
    /// canonicalization into a fresh graph.
    pub fn link_graph(&mut self, raw: &MemoryGraph) -> MemoryGraph {
        let mut linked = MemoryGraph::new();
        self.link_into(raw, &mut linked);
        linked
    }

    fn link_into(&mut self, raw: &MemoryGraph, linked: &mut MemoryGraph) {
        for (subject, edges) in raw.iter() {
            let (resolved_subject, _) = self.resolver.resolve(subject);
            for edge in edges {
                let (resolved_object, _) = self.resolver.resolve(&edge.object);
                let aliased_subject = self.aliases.canonicalize(&resolved_subject);
                let aliased_object = self.aliases.canonicalize(&resolved_object);
                linked.upsert(&aliased_subject, &edge.relation, &aliased_object);
            }
        }
    }

    /// The resolver's running cluster table, for diagnostics.
    pub fn resolver(&self) -> &EntityResolver {
        &self.resolver
    }
}
