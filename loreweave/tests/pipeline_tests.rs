//! End-to-end tests for the knowledge-graph pipeline.
//!
//! A scripted completion client stands in for the external service so the
//! extraction, resolution, canonicalization, and accumulation stages can be
//! exercised deterministically.

use async_trait::async_trait;
use loreweave::completion::{CompletionClient, CompletionError};
use loreweave::config::ConfigBuilder;
use loreweave::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Completion client that replays scripted responses in order.
#[derive(Debug)]
struct ScriptedClient {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedClient {
    fn new<I, S>(responses: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
        })
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, _prompt: &str) -> std::result::Result<String, CompletionError> {
        self.responses
            .lock()
            .expect("scripted responses lock")
            .pop_front()
            .ok_or_else(|| CompletionError::MalformedResponse("script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Completion client that always fails, simulating a service outage.
#[derive(Debug)]
struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, _prompt: &str) -> std::result::Result<String, CompletionError> {
        Err(CompletionError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn documents(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(format!("doc-{}", i), *text))
        .collect()
}

#[tokio::test]
async fn three_documents_collapse_to_two_canonical_subjects() {
    let client = ScriptedClient::new([
        "(Morgoth, ruled, Angband)",
        "(Morgoht, destroyed, Beleriand)",
        "(Eru, created, Arda)",
    ]);
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(client, &config);

    let docs = documents(&["first chapter", "second chapter", "third chapter"]);
    let (graph, report) = pipeline.build(&docs).await.unwrap();

    // "Morgoht" fuzzy-links to "Morgoth", which the alias table rewrites to
    // "Melkor"; "Eru" stays its own cluster.
    assert_eq!(graph.subject_count(), 2);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.subjects(), vec!["Melkor", "Eru"]);
    assert_eq!(
        graph.edges_of("Melkor"),
        &[
            Edge::new("ruled", "Angband"),
            Edge::new("destroyed", "Beleriand"),
        ]
    );
    assert_eq!(graph.edges_of("Eru"), &[Edge::new("created", "Arda")]);

    assert_eq!(report.documents, 3);
    assert_eq!(report.triplets, 3);
    assert_eq!(report.raw.subject_count, 3);
    assert_eq!(report.linked.subject_count, 2);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn resolution_never_increases_subject_count() {
    let client = ScriptedClient::new([
        "(Fëanor, crafted, Silmarils)\n(Feanor, swore oath to, Silmarils)\n(Fingolfin, challenged, Morgoth)",
    ]);
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(client, &config);

    let (_, report) = pipeline.build(&documents(&["one chapter"])).await.unwrap();

    assert!(report.linked.subject_count <= report.raw.subject_count);
}

#[tokio::test]
async fn alias_rewrite_can_produce_a_self_loop() {
    let client = ScriptedClient::new(["(Morgoth, served, Melkor)"]);
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(client, &config);

    let (graph, _) = pipeline.build(&documents(&["text"])).await.unwrap();

    assert_eq!(graph.subjects(), vec!["Melkor"]);
    assert_eq!(graph.edges_of("Melkor"), &[Edge::new("served", "Melkor")]);
}

#[tokio::test]
async fn empty_and_malformed_responses_become_diagnostics() {
    let client = ScriptedClient::new([
        "No relationships found in this text.",
        "(Eru, created, Arda)",
    ]);
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(client, &config);

    let (graph, report) = pipeline
        .build(&documents(&["barren text", "fertile text"]))
        .await
        .unwrap();

    // the first document contributes no edges but does not fail the run
    assert_eq!(graph.edge_count(), 1);
    assert!(report.diagnostics.contains(&Diagnostic::MalformedLine {
        document: "doc-0".to_string(),
        line: "No relationships found in this text.".to_string(),
    }));
    assert!(report.diagnostics.contains(&Diagnostic::EmptyExtraction {
        document: "doc-0".to_string(),
    }));
}

#[tokio::test]
async fn completion_failure_is_fatal_for_the_run() {
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(Arc::new(FailingClient), &config);

    let result = pipeline.build(&documents(&["text"])).await;

    assert!(matches!(result, Err(LoreweaveError::Completion(_))));
}

#[tokio::test]
async fn build_onto_continues_from_a_persisted_graph() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("snap"));

    // first run
    let client = ScriptedClient::new(["(Morgoth, ruled, Angband)"]);
    let config = ConfigBuilder::new().build().unwrap();
    let mut pipeline = GraphPipeline::new(client, &config);
    let (graph, _) = pipeline.build(&documents(&["first run"])).await.unwrap();
    store.save(&graph).unwrap();

    // second run, seeded from the snapshot
    let client = ScriptedClient::new(["(Melkor, corrupted, Maiar)"]);
    let mut pipeline = GraphPipeline::new(client, &config);
    let existing = store.load().unwrap().unwrap();
    let (graph, _) = pipeline
        .build_onto(&documents(&["second run"]), existing)
        .await
        .unwrap();

    assert_eq!(graph.subjects(), vec!["Melkor"]);
    assert_eq!(
        graph.edges_of("Melkor"),
        &[
            Edge::new("ruled", "Angband"),
            Edge::new("corrupted", "Maiar"),
        ]
    );
}

#[tokio::test]
async fn triplet_extractor_reports_per_document() {
    let client = ScriptedClient::new(["1. (Fëanor, crafted, Silmarils)\n2. not parseable"]);
    let config = ConfigBuilder::new().build().unwrap();
    let extractor = TripletExtractor::new(client, &config.extraction);

    let report = extractor
        .extract(&Document::new("silm-1", "chapter text"))
        .await
        .unwrap();

    assert_eq!(
        report.triplets,
        vec![Triplet::new("Fëanor", "crafted", "Silmarils")]
    );
    assert_eq!(report.diagnostics.len(), 1);
}
