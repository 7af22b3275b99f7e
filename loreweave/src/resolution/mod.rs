//! Entity resolution and alias canonicalization.
//!
//! Two deterministic passes decide the canonical display form of every
//! entity string: fuzzy linking against the clusters seen so far in the
//! current pass, then a static alias table applied to the linked result.
//! The alias table is applied strictly after fuzzy resolution; fuzzy
//! resolution never looks inside the alias table.

mod aliases;
mod resolver;
pub mod similarity;

pub use aliases::AliasTable;
pub use resolver::{EntityResolver, LinkDecision};
