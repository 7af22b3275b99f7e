//! Types for triplet extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An extracted (subject, relation, object) fact candidate.
///
/// The relation is free text, not drawn from a closed set; the relation
/// gazetteer only biases the extraction prompt and never validates output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplet {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Triplet {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.relation, self.object)
    }
}

/// A recoverable observation made while extracting a document.
///
/// Diagnostics are returned alongside the extracted triplets so callers can
/// assert on them directly; they are also logged, but logging is incidental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A nonempty response line that did not match the triplet pattern.
    /// The line is discarded and processing continues.
    MalformedLine { document: String, line: String },

    /// A document whose completion yielded zero triplets. The document
    /// contributes no edges and the pipeline continues.
    EmptyExtraction { document: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedLine { document, line } => {
                write!(f, "[{}] non-triplet line in response: {}", document, line)
            }
            Diagnostic::EmptyExtraction { document } => {
                write!(f, "[{}] no triplets extracted", document)
            }
        }
    }
}

/// The outcome of extracting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Triplets in the order they appeared in the response
    pub triplets: Vec<Triplet>,

    /// Diagnostics recorded while parsing
    pub diagnostics: Vec<Diagnostic>,
}
