//! Triplet extractor built on a completion service.

use super::parser::parse_completion;
use super::prompt::PromptTemplate;
use super::types::{Diagnostic, ExtractionReport};
use crate::Result;
use crate::completion::CompletionClient;
use crate::config::ExtractionConfig;
use crate::documents::Document;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Extracts raw triplets from one document at a time.
///
/// Each call blocks on a single completion request; a failure of the
/// external call propagates as a fatal error for that document.
#[derive(Debug)]
pub struct TripletExtractor {
    client: Arc<dyn CompletionClient>,
    prompt: PromptTemplate,
}

impl TripletExtractor {
    pub fn new(client: Arc<dyn CompletionClient>, config: &ExtractionConfig) -> Self {
        Self {
            client,
            prompt: PromptTemplate::from_config(config),
        }
    }

    pub fn with_template(client: Arc<dyn CompletionClient>, prompt: PromptTemplate) -> Self {
        Self { client, prompt }
    }

    /// Extract triplets from one document.
    ///
    /// Zero triplets is a valid outcome, recorded as an
    /// [`Diagnostic::EmptyExtraction`] warning rather than an error.
    pub async fn extract(&self, document: &Document) -> Result<ExtractionReport> {
        let prompt = self.prompt.render(&document.text);
        debug!(
            document = %document.id,
            prompt_chars = prompt.len(),
            "Sending extraction prompt"
        );

        let response = self.client.complete(&prompt).await?;
        debug!(
            document = %document.id,
            response_chars = response.len(),
            "Received extraction response"
        );

        let (triplets, mut diagnostics) = parse_completion(&document.id, &response);

        for diagnostic in &diagnostics {
            debug!("{}", diagnostic);
        }

        if triplets.is_empty() {
            warn!(
                document = %document.id,
                "No triplets extracted; response may not contain the expected format"
            );
            diagnostics.push(Diagnostic::EmptyExtraction {
                document: document.id.clone(),
            });
        } else {
            info!(
                document = %document.id,
                count = triplets.len(),
                "Extracted triplets"
            );
        }

        Ok(ExtractionReport {
            triplets,
            diagnostics,
        })
    }
}
