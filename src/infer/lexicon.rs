//! Static dictionaries driving candidate exclusion and label matching.
//!
//! Kept as plain data, separate from pass logic, so the lists can be
//! extended or localized without touching the passes themselves.

use once_cell::sync::Lazy;
use regex::Regex;

/// Denylist of terms that disqualify a line or run from name candidacy.
///
/// Deliberately broad — false positives are acceptable; the bias is
/// away from ever picking a section header or tech noun as a name.
/// Matching is case-insensitive substring containment.
pub static RESUME_KEYWORDS: &[&str] = &[
    // Document types
    "resume", "cv", "curriculum", "vitae",
    // Sections
    "experience", "education", "skills", "objective", "summary", "contact",
    "employment", "work", "position", "references", "projects", "certification",
    // Contact info
    "address", "phone", "email", "linkedin", "github", "portfolio", "website",
    // Technical terms
    "software", "developer", "engineer", "manager", "analyst", "programmer",
    "javascript", "python", "react", "node", "database", "api", "frontend", "backend",
    // Companies (common ones)
    "microsoft", "google", "amazon", "facebook", "apple", "netflix", "uber",
    // Time indicators
    "years", "months", "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
    "present", "current", "ago",
    // Education
    "university", "college", "school", "degree", "bachelor", "master", "phd",
    "graduation", "gpa", "honors",
];

/// Explicit name-label patterns checked against the top lines of a
/// document. The capture group is the labelled value.
pub static LABEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^name\s*:?\s*(.+)$",
        r"(?i)^full\s*name\s*:?\s*(.+)$",
        r"(?i)^candidate\s*:?\s*(.+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("label pattern compiles"))
    .collect()
});

/// True if the text contains any denylisted term, case-insensitively.
pub fn contains_resume_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    RESUME_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_headers_are_flagged() {
        assert!(contains_resume_keyword("Work Experience"));
        assert!(contains_resume_keyword("EDUCATION"));
        assert!(contains_resume_keyword("Skills & Tools"));
    }

    #[test]
    fn matching_is_substring_based() {
        // "cv" appears inside other words; broad by design.
        assert!(contains_resume_keyword("my cv attached"));
        assert!(contains_resume_keyword("Senior Developer"));
    }

    #[test]
    fn ordinary_names_pass() {
        assert!(!contains_resume_keyword("John Smith"));
        assert!(!contains_resume_keyword("Jane A. Doe"));
    }

    #[test]
    fn label_patterns_capture_value() {
        let caps = LABEL_PATTERNS[0].captures("Name: Jane Doe").unwrap();
        assert_eq!(&caps[1], "Jane Doe");

        let caps = LABEL_PATTERNS[1].captures("Full Name Juan Perez").unwrap();
        assert_eq!(&caps[1], "Juan Perez");

        let caps = LABEL_PATTERNS[2].captures("CANDIDATE: Ada Lovelace").unwrap();
        assert_eq!(&caps[1], "Ada Lovelace");
    }

    #[test]
    fn label_patterns_anchor_at_line_start() {
        assert!(LABEL_PATTERNS[0].captures("my name: Jane").is_none());
    }
}
