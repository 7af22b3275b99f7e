//! Parsing of free-text completion output into triplets.

use super::types::{Diagnostic, Triplet};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMBERED_PREFIX: Regex = Regex::new(r"^\d+\.\s*").unwrap();
}

/// Parse a completion response into triplets plus diagnostics.
///
/// Each line is trimmed and stripped of any leading numbered-list prefix. A
/// line of the form `(subject, relation, object)` with exactly three
/// comma-separated parts yields a triplet; any other nonempty line is
/// discarded and recorded as a [`Diagnostic::MalformedLine`].
pub fn parse_completion(document: &str, response: &str) -> (Vec<Triplet>, Vec<Diagnostic>) {
    let mut triplets = Vec::new();
    let mut diagnostics = Vec::new();

    for raw_line in response.lines() {
        let line = raw_line.trim();
        let line = NUMBERED_PREFIX.replace(line, "");

        if line.starts_with('(') && line.ends_with(')') {
            let inner = &line[1..line.len() - 1];
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() == 3 {
                triplets.push(Triplet::new(
                    parts[0].trim(),
                    parts[1].trim(),
                    parts[2].trim(),
                ));
                continue;
            }
        }

        if !line.is_empty() {
            diagnostics.push(Diagnostic::MalformedLine {
                document: document.to_string(),
                line: line.to_string(),
            });
        }
    }

    (triplets, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_triplet_line() {
        let (triplets, diagnostics) = parse_completion("doc", "(Morgoth, created, Silmarils)");
        assert_eq!(
            triplets,
            vec![Triplet::new("Morgoth", "created", "Silmarils")]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn strips_numbered_list_prefix() {
        let (triplets, diagnostics) = parse_completion("doc", "1. (Fëanor, crafted, Silmarils)");
        assert_eq!(triplets, vec![Triplet::new("Fëanor", "crafted", "Silmarils")]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn non_triplet_line_becomes_diagnostic() {
        let (triplets, diagnostics) = parse_completion("doc", "Not a triplet");
        assert!(triplets.is_empty());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::MalformedLine {
                document: "doc".to_string(),
                line: "Not a triplet".to_string(),
            }]
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (triplets, diagnostics) = parse_completion("doc", "\n\n   \n");
        assert!(triplets.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let (triplets, diagnostics) = parse_completion("doc", "(Morgoth, ruled)");
        assert!(triplets.is_empty());
        assert_eq!(diagnostics.len(), 1);

        let (triplets, diagnostics) = parse_completion("doc", "(a, b, c, d)");
        assert!(triplets.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn parts_are_trimmed() {
        let (triplets, _) = parse_completion("doc", "( Morgoth ,  ruled , Angband )");
        assert_eq!(triplets, vec![Triplet::new("Morgoth", "ruled", "Angband")]);
    }

    #[test]
    fn mixed_response_keeps_valid_lines() {
        let response = "Here are the relationships:\n\
                        1. (Morgoth, ruled, Angband)\n\
                        2. (Ungoliant, devoured, the Two Trees, and their light)\n\
                        3. (Beren, loved, Lúthien)";
        let (triplets, diagnostics) = parse_completion("doc", response);

        assert_eq!(
            triplets,
            vec![
                Triplet::new("Morgoth", "ruled", "Angband"),
                Triplet::new("Beren", "loved", "Lúthien"),
            ]
        );
        // preamble plus the four-part line
        assert_eq!(diagnostics.len(), 2);
    }
}
