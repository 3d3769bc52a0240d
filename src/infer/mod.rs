//! Multi-pass name inference.
//!
//! Four independent passes propose weighted candidates from different
//! signals — font size, line position, email prefix, indentation — and
//! a merge step deduplicates, combines and ranks them. The passes are an
//! ad hoc ensemble of weak classifiers; none short-circuits another, so
//! recall stays high and the ranking does the arbitration.
//!
//! Inference never fails: when nothing name-shaped exists anywhere, the
//! result is an empty name with zero confidence and a
//! `"no-candidates-found"` provenance tag.

pub mod lexicon;
pub mod passes;
pub mod shape;

use serde::Serialize;
use tracing::debug;

use crate::extract::types::TextRun;

/// When two candidates share text, the incoming score folds in at half
/// weight.
const DUPLICATE_SCORE_FACTOR: f32 = 0.5;

/// Provenance tag for the empty result.
pub const NO_CANDIDATES: &str = "no-candidates-found";

/// A hypothesis that a given string is the document owner's name.
#[derive(Debug, Clone, Serialize)]
pub struct NameCandidate {
    /// Proposed name, already normalized by [`shape::clean_name`].
    pub text: String,
    /// Unbounded positive weight from pass-specific signals.
    pub score: f32,
    /// 0–1 probability-like estimate, independent of `score`.
    pub confidence: f32,
    /// Which pass (and which signal within it) produced this candidate.
    /// Informational only; merged candidates concatenate their tags.
    pub source: String,
}

/// The winning hypothesis (or the explicit absence of one).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameInference {
    pub name: String,
    pub confidence: f32,
    pub source: String,
}

/// Run all passes and pick the best candidate.
pub fn infer(text: &str, runs: &[TextRun], email: Option<&str>) -> NameInference {
    let ranked = ranked_candidates(text, runs, email);

    match ranked.into_iter().next() {
        Some(winner) => {
            debug!(name = %winner.text, source = %winner.source, "name candidate selected");
            NameInference {
                name: winner.text,
                confidence: winner.confidence,
                source: winner.source,
            }
        }
        None => NameInference {
            name: String::new(),
            confidence: 0.0,
            source: NO_CANDIDATES.to_string(),
        },
    }
}

/// Run all passes, merge duplicates, and return candidates ranked by
/// `score × confidence` descending.
pub fn ranked_candidates(text: &str, runs: &[TextRun], email: Option<&str>) -> Vec<NameCandidate> {
    let trimmed_lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let raw_lines: Vec<&str> = text.lines().collect();

    let mut candidates = Vec::new();

    if !runs.is_empty() {
        candidates.extend(passes::font_size_pass(runs));
    }
    candidates.extend(passes::position_pass(&trimmed_lines));
    if let Some(email) = email {
        candidates.extend(passes::email_prefix_pass(email));
    }
    candidates.extend(passes::indentation_pass(&raw_lines));

    debug!(count = candidates.len(), "candidates before merge");
    merge_candidates(candidates)
}

/// Deduplicate by case-insensitive exact text, combining scores, then
/// rank.
///
/// Combination: `score += 0.5 × incoming.score`, confidence takes the
/// max, and source tags concatenate with `" + "`.
fn merge_candidates(candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
    let mut merged: Vec<NameCandidate> = Vec::new();

    for candidate in candidates {
        if let Some(existing) = merged
            .iter_mut()
            .find(|m| m.text.eq_ignore_ascii_case(&candidate.text))
        {
            existing.score += candidate.score * DUPLICATE_SCORE_FACTOR;
            existing.confidence = existing.confidence.max(candidate.confidence);
            existing.source.push_str(" + ");
            existing.source.push_str(&candidate.source);
        } else {
            merged.push(candidate);
        }
    }

    merged.sort_by(|a, b| {
        (b.score * b.confidence)
            .partial_cmp(&(a.score * a.confidence))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str, score: f32, confidence: f32, source: &str) -> NameCandidate {
        NameCandidate {
            text: text.to_string(),
            score,
            confidence,
            source: source.to_string(),
        }
    }

    // ─── Merge mechanics ─────────────────────────────────────────────────────

    #[test]
    fn merge_combines_duplicates_with_documented_formula() {
        let merged = merge_candidates(vec![
            candidate("John Smith", 10.0, 0.7, "position-line-1"),
            candidate("john smith", 6.0, 0.6, "email-prefix-analysis"),
        ]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].score - 13.0).abs() < 1e-6);
        assert!((merged[0].confidence - 0.7).abs() < 1e-6);
        assert_eq!(merged[0].source, "position-line-1 + email-prefix-analysis");
    }

    #[test]
    fn merge_keeps_distinct_texts_apart() {
        let merged = merge_candidates(vec![
            candidate("John Smith", 10.0, 0.7, "a"),
            candidate("Jane Doe", 7.0, 0.6, "b"),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_ranks_by_score_times_confidence() {
        let merged = merge_candidates(vec![
            candidate("Low Wins Not", 10.0, 0.1, "a"),
            candidate("High Wins", 3.0, 0.9, "b"),
        ]);
        assert_eq!(merged[0].text, "High Wins");
    }

    // ─── Engine scenarios ────────────────────────────────────────────────────

    #[test]
    fn top_line_name_wins() {
        let text = "John Smith\nSoftware Engineer\njohn.smith@email.com";
        let result = infer(text, &[], Some("john.smith@email.com"));
        assert_eq!(result.name, "John Smith");
        assert!(result.source.contains("position-line-1"));
        assert!(result.confidence >= 0.7);
    }

    #[test]
    fn keyword_first_line_defers_to_second() {
        let text = "Resume\nJane A. Doe\njane.doe@x.com";
        let result = infer(text, &[], None);
        assert_eq!(result.name, "Jane A. Doe");
        assert_eq!(result.source, "position-line-2");
    }

    #[test]
    fn email_prefix_wins_when_no_lines_qualify() {
        let text = "Experience\nWorked at various companies since long ago";
        let result = infer(text, &[], Some("robert.jones@corp.com"));
        assert_eq!(result.name, "Robert Jones");
        assert!((result.confidence - 0.6).abs() < 1e-6);
        assert!(result.source.contains("email-prefix-analysis"));
    }

    #[test]
    fn no_signal_means_empty_result() {
        let text = "Work Experience\nEducation\nSkills";
        let result = infer(text, &[], None);
        assert_eq!(
            result,
            NameInference {
                name: String::new(),
                confidence: 0.0,
                source: NO_CANDIDATES.to_string(),
            }
        );
    }

    #[test]
    fn empty_input_means_empty_result() {
        let result = infer("", &[], None);
        assert_eq!(result.name, "");
        assert_eq!(result.source, NO_CANDIDATES);
    }

    #[test]
    fn inference_is_idempotent() {
        let text = "   \n           Maria Garcia\nSome body text follows";
        let runs = vec![TextRun {
            text: "Maria Garcia".to_string(),
            x: 200.0,
            y: 650.0,
            font_size: 30.0,
        }];
        let first = infer(text, &runs, Some("maria.garcia@mail.com"));
        let second = infer(text, &runs, Some("maria.garcia@mail.com"));
        assert_eq!(first, second);
    }

    #[test]
    fn section_header_never_becomes_a_candidate() {
        // Name-shaped (two capitalized, letters-only words) but always
        // excluded by the keyword filter, in every pass.
        let text = "              Work Experience\nWork Experience";
        let runs = vec![
            TextRun {
                text: "Work Experience".to_string(),
                x: 100.0,
                y: 700.0,
                font_size: 28.0,
            },
            TextRun {
                text: "filler words here".to_string(),
                x: 100.0,
                y: 650.0,
                font_size: 12.0,
            },
            TextRun {
                text: "more filler words".to_string(),
                x: 100.0,
                y: 630.0,
                font_size: 12.0,
            },
        ];
        assert!(ranked_candidates(text, &runs, None).is_empty());
    }

    #[test]
    fn font_pass_reinforces_positional_match() {
        let text = "Maria Garcia\nSenior things and more things";
        let runs = vec![
            TextRun {
                text: "Maria Garcia".to_string(),
                x: 100.0,
                y: 700.0,
                font_size: 24.0,
            },
            TextRun {
                text: "body text of normal size".to_string(),
                x: 100.0,
                y: 650.0,
                font_size: 12.0,
            },
            TextRun {
                text: "even more body text".to_string(),
                x: 100.0,
                y: 630.0,
                font_size: 12.0,
            },
        ];
        let ranked = ranked_candidates(text, &runs, None);
        assert_eq!(ranked[0].text, "Maria Garcia");
        assert!(ranked[0].source.contains("font-size-analysis"));
        assert!(ranked[0].source.contains("position-line-1"));
    }
}
