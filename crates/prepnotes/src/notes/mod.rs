//! Stage note templating.
//!
//! Each stage module is a pure function from record facts to an HTML note.
//! The brevity check and sequence parser decide when and from what a note is
//! regenerated.

pub mod etching;
pub mod grinding;
pub mod markup;
pub mod mounting;
pub mod polishing;
pub mod sectioning;

pub use etching::etching_notes;
pub use grinding::grinding_notes;
pub use mounting::mounting_notes;
pub use polishing::polishing_notes;
pub use sectioning::sectioning_notes;

use serde_json::Value;

/// Shorter than this (trimmed) and a plain note is never informative.
const MIN_NOTE_CHARS: usize = 50;
/// Plain notes under this length are still treated as placeholders.
const MIN_PLAIN_NOTE_CHARS: usize = 200;

/// Returns true if the note should be replaced by a generated one.
///
/// Notes that already carry bold or list markup count as detailed no matter
/// how short they are.
pub fn is_brief(note: &str) -> bool {
    if markup::has_rich_formatting(note) {
        return false;
    }
    if note.trim().chars().count() < MIN_NOTE_CHARS {
        return true;
    }
    note.chars().count() < MIN_PLAIN_NOTE_CHARS
}

/// Parses a JSON-array cell into its string entries.
///
/// Blank, malformed or non-array input yields an empty list. Numeric entries
/// keep their JSON spelling (`[120, 240]` reads as `"120"`, `"240"`).
pub fn parse_sequence(cell: &str) -> Vec<String> {
    if cell.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(cell) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brevity_boundaries() {
        let short = "a".repeat(49);
        assert!(is_brief(&short));
        assert!(is_brief(""));
        assert!(is_brief("   "));

        let medium = "a".repeat(150);
        assert!(is_brief(&medium));

        let long = "a".repeat(201);
        assert!(!is_brief(&long));

        assert!(!is_brief("<strong>x</strong>"));
        assert!(!is_brief("<ul><li>a</li></ul>"));
    }

    #[test]
    fn test_brevity_trims_before_minimum_length() {
        let padded = format!("{}{}", " ".repeat(100), "a".repeat(30));
        assert!(is_brief(&padded));
    }

    #[test]
    fn test_brevity_counts_characters_not_bytes() {
        // 199 characters but more than 200 bytes.
        let note = "μ".repeat(199);
        assert!(is_brief(&note));
    }

    #[test]
    fn test_parse_sequence_valid() {
        assert_eq!(
            parse_sequence(r#"["120", "240 grit", "diamond"]"#),
            vec!["120", "240 grit", "diamond"]
        );
    }

    #[test]
    fn test_parse_sequence_degrades_to_empty() {
        assert!(parse_sequence("").is_empty());
        assert!(parse_sequence("  ").is_empty());
        assert!(parse_sequence("[]").is_empty());
        assert!(parse_sequence("[\"unterminated").is_empty());
        assert!(parse_sequence("\"Nital\"").is_empty());
        assert!(parse_sequence("{\"a\": 1}").is_empty());
    }

    #[test]
    fn test_parse_sequence_keeps_numbers_and_skips_other_values() {
        assert_eq!(
            parse_sequence(r#"[120, "240", null, true, {"x": 1}]"#),
            vec!["120", "240"]
        );
    }
}
