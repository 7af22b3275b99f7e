//! Static alias canonicalization.

use crate::config::ResolutionConfig;
use std::collections::HashMap;

/// A static table of known alternate names (epithets, alternate titles)
/// collapsed onto one canonical identifier, independent of fuzzy similarity.
///
/// Lookup is case-insensitive; a hit returns the canonical name in title
/// case, a miss returns the input unchanged. Pure function of the table and
/// the input, no mutable state.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    /// Build a table from (alias, canonical) pairs. Both sides are
    /// normalized to lowercase.
    pub fn new<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let map = pairs
            .into_iter()
            .map(|(alias, canonical)| {
                (
                    alias.as_ref().trim().to_lowercase(),
                    canonical.as_ref().trim().to_lowercase(),
                )
            })
            .collect();
        Self { map }
    }

    pub fn from_config(config: &ResolutionConfig) -> Self {
        Self::new(
            config
                .aliases
                .iter()
                .map(|pair| (pair.alias.as_str(), pair.canonical.as_str())),
        )
    }

    /// Empty table; every entity passes through unchanged.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Apply the table to a resolved entity string.
    pub fn canonicalize(&self, entity: &str) -> String {
        match self.map.get(&entity.to_lowercase()) {
            Some(canonical) => title_case(canonical),
            None => entity.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::from_config(&ResolutionConfig::default())
    }
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AliasTable {
        AliasTable::new([("morgoth", "melkor"), ("elessar", "aragorn")])
    }

    #[test]
    fn known_alias_maps_to_title_cased_canonical() {
        assert_eq!(table().canonicalize("Morgoth"), "Melkor");
        assert_eq!(table().canonicalize("MORGOTH"), "Melkor");
        assert_eq!(table().canonicalize("morgoth"), "Melkor");
    }

    #[test]
    fn unknown_entity_passes_through_unchanged() {
        assert_eq!(table().canonicalize("Fëanor"), "Fëanor");
        assert_eq!(table().canonicalize("ungoliant"), "ungoliant");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        // "melkor" is not itself an alias key, so a second application is a
        // no-op on the result of the first.
        let once = table().canonicalize("Morgoth");
        let twice = table().canonicalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn multiword_canonical_names_are_title_cased() {
        let table = AliasTable::new([("strider", "aragorn son of arathorn")]);
        assert_eq!(table.canonicalize("Strider"), "Aragorn Son Of Arathorn");
    }

    #[test]
    fn default_table_carries_known_epithets() {
        let table = AliasTable::default();
        assert_eq!(table.canonicalize("Gorthaur"), "Sauron");
        assert_eq!(table.canonicalize("Mithrandir"), "Gandalf");
    }

    #[test]
    fn empty_table_is_identity() {
        let table = AliasTable::empty();
        assert_eq!(table.canonicalize("Morgoth"), "Morgoth");
    }
}
