//! Triplet extraction from free-form completion output.
//!
//! One bounded chunk of document text is embedded in a fixed prompt together
//! with entity and relation gazetteers and a cap on the number of triples to
//! return. The completion service's free-text response is parsed line by
//! line into (subject, relation, object) triplets; lines that do not match
//! the triplet pattern are recorded as diagnostics, never raised as errors.

mod extractor;
mod parser;
mod prompt;
mod types;

pub use extractor::TripletExtractor;
pub use parser::parse_completion;
pub use prompt::PromptTemplate;
pub use types::{Diagnostic, ExtractionReport, Triplet};
