//! Regex-based contact extraction.
//!
//! Email and phone patterns are reliable enough that no heuristics are
//! needed: the first match wins, full stop. Confidence values are fixed
//! constants signalling presence to downstream consumers, not quality
//! measures.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reported when any email is found.
pub const EMAIL_CONFIDENCE: f32 = 0.9;

/// Reported when any phone number is found.
pub const PHONE_CONFIDENCE: f32 = 0.8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern compiles")
});

// Tolerates optional country code, parentheses, and -/./space separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern compiles")
});

/// First email address in the text, if any.
pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone number in the text, if any.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
