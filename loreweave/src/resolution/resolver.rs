//! Fuzzy entity linking against an insertion-ordered cluster table.

use super::similarity;
use crate::config::ResolutionConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The decision made for a single resolved entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkDecision {
    /// Matched an existing cluster; `via` is the normalized key that matched
    Linked { via: String },

    /// No existing cluster scored above the threshold; a new cluster was
    /// registered for this entity
    New,
}

/// Decides which canonical cluster a raw entity string belongs to, given
/// everything resolved so far in the current pass.
///
/// Clusters are kept in first-seen insertion order and the walk stops at the
/// first key scoring strictly above the threshold: first-match, not
/// best-match. Two equally similar clusters are never compared against each
/// other; whichever was inserted earlier wins, so resolution is sensitive to
/// insertion order and deterministic for a fixed document ordering.
///
/// The canonical value of a cluster is the first-encountered original-casing
/// form; later members are never promoted.
#[derive(Debug, Clone)]
pub struct EntityResolver {
    /// (normalized key, canonical display) in first-seen order
    entries: Vec<(String, String)>,
    threshold: f64,
}

impl EntityResolver {
    /// Create a resolver with the given similarity threshold (0-100 scale,
    /// strictly exclusive).
    pub fn new(threshold: f64) -> Self {
        Self {
            entries: Vec::new(),
            threshold,
        }
    }

    pub fn from_config(config: &ResolutionConfig) -> Self {
        Self::new(config.similarity_threshold)
    }

    /// Normalize an entity string for use as a lookup key. The normalized
    /// form is never displayed.
    pub fn normalize(entity: &str) -> String {
        entity.trim().to_lowercase()
    }

    /// Register known canonical entities, in order, without fuzzy matching
    /// between them. Used to continue from a previously persisted graph.
    pub fn seed<I, S>(&mut self, entities: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entity in entities {
            let entity = entity.as_ref();
            let key = Self::normalize(entity);
            if !self.entries.iter().any(|(known, _)| known == &key) {
                self.entries.push((key, entity.trim().to_string()));
            }
        }
    }

    /// Resolve a raw entity string to its canonical cluster form.
    ///
    /// Walks existing clusters in insertion order and returns the canonical
    /// value of the first whose key scores strictly above the threshold. If
    /// none does, the entity is registered as a new cluster and returned
    /// unchanged.
    pub fn resolve(&mut self, raw: &str) -> (String, LinkDecision) {
        let key = Self::normalize(raw);

        for (known, canonical) in &self.entries {
            if similarity::ratio(&key, known) > self.threshold {
                debug!(entity = raw, linked = %canonical, via = %known, "Linked entity");
                return (
                    canonical.clone(),
                    LinkDecision::Linked { via: known.clone() },
                );
            }
        }

        let canonical = raw.trim().to_string();
        debug!(entity = %canonical, "New entity encountered");
        self.entries.push((key, canonical.clone()));
        (canonical, LinkDecision::New)
    }

    /// Number of distinct clusters registered so far.
    pub fn cluster_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_is_registered_and_returned_unchanged() {
        let mut resolver = EntityResolver::new(80.0);
        let (canonical, decision) = resolver.resolve("Morgoth");
        assert_eq!(canonical, "Morgoth");
        assert_eq!(decision, LinkDecision::New);
        assert_eq!(resolver.cluster_count(), 1);
    }

    #[test]
    fn similar_entity_links_to_first_seen_casing() {
        let mut resolver = EntityResolver::new(80.0);
        resolver.resolve("Morgoth");

        let (canonical, decision) = resolver.resolve("Morgoht");
        assert_eq!(canonical, "Morgoth");
        assert_eq!(
            decision,
            LinkDecision::Linked {
                via: "morgoth".to_string()
            }
        );
        assert_eq!(resolver.cluster_count(), 1);
    }

    #[test]
    fn score_exactly_at_threshold_stays_distinct() {
        // ratio("abcde", "abcxy") == 80.0 exactly; the threshold is
        // strictly exclusive, so these form two clusters.
        let mut resolver = EntityResolver::new(80.0);
        resolver.resolve("abcde");
        let (canonical, decision) = resolver.resolve("abcxy");
        assert_eq!(canonical, "abcxy");
        assert_eq!(decision, LinkDecision::New);
        assert_eq!(resolver.cluster_count(), 2);
    }

    #[test]
    fn insertion_order_decides_canonical_casing() {
        let mut forward = EntityResolver::new(80.0);
        let (a1, _) = forward.resolve("Morgoth");
        let (a2, _) = forward.resolve("Morgoht");
        assert_eq!(a1, "Morgoth");
        assert_eq!(a2, "Morgoth");

        let mut reverse = EntityResolver::new(80.0);
        let (b1, _) = reverse.resolve("Morgoht");
        let (b2, _) = reverse.resolve("Morgoth");
        assert_eq!(b1, "Morgoht");
        assert_eq!(b2, "Morgoht");
    }

    #[test]
    fn first_match_wins_over_better_later_match() {
        // x and y differ by exactly 4 edits: ratio 80.0, two clusters.
        // z scores 85 against x and 95 against y; x was inserted first,
        // so z links to x despite y's higher score.
        let x = "aaaaaaxxxx";
        let y = "aaaaaayyyy";
        let z = "aaaaaayyyx";
        assert_eq!(similarity::ratio(x, y), 80.0);
        assert!(similarity::ratio(z, x) > 80.0);
        assert!(similarity::ratio(z, y) > similarity::ratio(z, x));

        let mut resolver = EntityResolver::new(80.0);
        resolver.resolve(x);
        let (_, decision) = resolver.resolve(y);
        assert_eq!(decision, LinkDecision::New);

        let (canonical, decision) = resolver.resolve(z);
        assert_eq!(canonical, x);
        assert_eq!(decision, LinkDecision::Linked { via: x.to_string() });
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        let mut resolver = EntityResolver::new(80.0);
        resolver.resolve("  Melkor  ");
        let (canonical, decision) = resolver.resolve("MELKOR");
        assert_eq!(canonical, "Melkor");
        assert!(matches!(decision, LinkDecision::Linked { .. }));
    }

    #[test]
    fn seeded_entities_form_clusters_without_matching() {
        let mut resolver = EntityResolver::new(80.0);
        resolver.seed(["Melkor", "Eru", "Melkor"]);
        assert_eq!(resolver.cluster_count(), 2);

        let (canonical, decision) = resolver.resolve("melkor");
        assert_eq!(canonical, "Melkor");
        assert!(matches!(decision, LinkDecision::Linked { .. }));
    }
}
