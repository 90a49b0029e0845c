//! Case-insensitive predicates over optional record text.
//!
//! Every predicate is total: absent or empty text never matches. Folding uses
//! Unicode simple lowercase, so results do not depend on the host locale.

fn present(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

/// True if any candidate is a case-insensitive substring of `text`.
pub fn contains_any(text: Option<&str>, candidates: &[&str]) -> bool {
    match present(text) {
        Some(folded) => candidates
            .iter()
            .any(|candidate| folded.contains(&candidate.to_lowercase())),
        None => false,
    }
}

/// True if `candidate` is a case-insensitive substring of `text`.
pub fn contains_one(text: Option<&str>, candidate: &str) -> bool {
    contains_any(text, &[candidate])
}

/// True if `text` equals any candidate, ignoring case.
pub fn equals_any(text: Option<&str>, candidates: &[&str]) -> bool {
    match present(text) {
        Some(folded) => candidates
            .iter()
            .any(|candidate| folded == candidate.to_lowercase()),
        None => false,
    }
}

/// True if `text` equals `candidate`, ignoring case.
pub fn equals_one(text: Option<&str>, candidate: &str) -> bool {
    equals_any(text, &[candidate])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_never_match() {
        assert!(!contains_any(None, &["cap"]));
        assert!(!contains_any(Some(""), &[""]));
        assert!(!equals_one(None, "open"));
        assert!(!equals_one(Some(""), ""));
    }

    #[test]
    fn test_contains_ignores_case() {
        assert!(contains_one(Some("Bleeding Crown"), "crown"));
        assert!(contains_any(Some("GIANT CLAM"), &["spore", "clam"]));
        assert!(!contains_any(Some("Nirnroot"), &["spore", "cap"]));
    }

    #[test]
    fn test_equals_is_whole_string() {
        assert!(equals_one(Some("Open"), "open"));
        assert!(!equals_one(Some("Open Door"), "open"));
        assert!(equals_any(Some("SCAVENGE"), &["catch", "scavenge"]));
    }

    #[test]
    fn test_non_ascii_folding() {
        assert!(contains_one(Some("ÄLTAR"), "ältar"));
        assert!(equals_one(Some("Ölfass"), "ölfass"));
    }
}
