//! Extraction prompt construction.

use crate::config::ExtractionConfig;

/// Template for the fixed extraction prompt sent with each text chunk.
///
/// Embeds the entity and relation gazetteers plus the triples-per-chunk cap.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    entities: Vec<String>,
    relations: Vec<String>,
    max_triplets: usize,
}

impl PromptTemplate {
    pub fn new(entities: Vec<String>, relations: Vec<String>, max_triplets: usize) -> Self {
        Self {
            entities,
            relations,
            max_triplets,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            config.entity_gazetteer.clone(),
            config.relation_gazetteer.clone(),
            config.max_triplets_per_chunk,
        )
    }

    /// Render the full prompt for one chunk of document text.
    pub fn render(&self, text: &str) -> String {
        let mut prompt = String::from(
            "Extract key relationships from the following text, focusing on \
             characters, locations, and events.\n",
        );

        if !self.entities.is_empty() {
            prompt.push_str("Pay special attention to these entities: ");
            prompt.push_str(&self.entities.join(", "));
            prompt.push('\n');
        }
        if !self.relations.is_empty() {
            prompt.push_str("Prefer these relationships where applicable: ");
            prompt.push_str(&self.relations.join(", "));
            prompt.push('\n');
        }

        prompt.push_str("\nFormat as (Entity1, Relationship, Entity2).\n");
        prompt.push_str(
            "Only extract relationships that are explicitly stated or strongly implied.\n",
        );
        prompt.push_str(&format!(
            "Limit to {} most important relationships.\n",
            self.max_triplets
        ));
        prompt.push_str(&format!("\nText: {}\n\nRelationships:\n", text));

        prompt
    }

    pub fn max_triplets(&self) -> usize {
        self.max_triplets
    }
}
