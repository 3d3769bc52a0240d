//! The four candidate-producing extraction passes.
//!
//! Each pass is a stateless function from its inputs to a list of
//! [`NameCandidate`]s; passes never see each other's output. Recall is
//! maximized here and precision recovered later by the merge/rank step.
//! All weights live in named constants so they can be tuned and tested
//! in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{contains_resume_keyword, LABEL_PATTERNS};
use super::shape::{clean_name, is_plausible_name};
use super::NameCandidate;
use crate::extract::types::TextRun;

/// A run must exceed the median font size by this ratio to count as a
/// headline.
pub const HEADLINE_FONT_RATIO: f32 = 1.2;

/// Absolute y-threshold for headline runs, in the flipped top-left
/// coordinate space. Assumes ~792pt (US Letter) pages; misfires on A4
/// or scaled documents — preserved as documented rather than fixed.
pub const HEADLINE_MIN_Y: f32 = 600.0;

const FONT_PASS_CONFIDENCE: f32 = 0.85;

/// Lines inspected by the positional pass.
const POSITION_SCAN_LINES: usize = 5;

/// Whole-line scores per line index.
const POSITION_SCORES: [f32; POSITION_SCAN_LINES] = [10.0, 7.0, 5.0, 3.0, 3.0];

const LABEL_CONFIDENCE: f32 = 0.95;
const LABEL_BASE_SCORE: f32 = 10.0;

const EMAIL_SCORE: f32 = 6.0;
const EMAIL_CONFIDENCE: f32 = 0.6;

/// Raw lines inspected by the indentation pass.
const INDENT_SCAN_LINES: usize = 11;

/// Leading whitespace must exceed this many characters to look centered.
const INDENT_MIN_LEADING: usize = 10;

const INDENT_CONFIDENCE: f32 = 0.75;
const INDENT_BASE_SCORE: f32 = 8.0;

static CAMEL_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camelCase pattern compiles"));

/// Font-size analysis: runs markedly larger than the document median,
/// positioned in the headline band, that look like names.
pub(super) fn font_size_pass(runs: &[TextRun]) -> Vec<NameCandidate> {
    let mut sizes: Vec<f32> = runs
        .iter()
        .map(|run| if run.font_size > 0.0 { run.font_size } else { 12.0 })
        .collect();
    sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = sizes[sizes.len() / 2];

    let mut candidates = Vec::new();
    for run in runs {
        let font_size = if run.font_size > 0.0 { run.font_size } else { 12.0 };
        if font_size <= median * HEADLINE_FONT_RATIO || run.y <= HEADLINE_MIN_Y {
            continue;
        }
        let trimmed = run.text.trim();
        if is_plausible_name(trimmed) && !contains_resume_keyword(trimmed) {
            candidates.push(NameCandidate {
                text: clean_name(trimmed),
                score: font_size / median,
                confidence: FONT_PASS_CONFIDENCE,
                source: "font-size-analysis".to_string(),
            });
        }
    }
    candidates
}

/// Positional analysis over the first trimmed, non-empty lines.
///
/// A line can contribute twice: once through an explicit label match
/// and once as a whole-line name. Both survive to the merge step, which
/// collapses them only when the cleaned texts coincide.
pub(super) fn position_pass(lines: &[&str]) -> Vec<NameCandidate> {
    let mut candidates = Vec::new();

    for (i, line) in lines.iter().take(POSITION_SCAN_LINES).enumerate() {
        if contains_resume_keyword(line) {
            continue;
        }

        for pattern in LABEL_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                let extracted = clean_name(&caps[1]);
                if is_plausible_name(&extracted) {
                    candidates.push(NameCandidate {
                        text: extracted,
                        score: LABEL_BASE_SCORE - i as f32,
                        confidence: LABEL_CONFIDENCE,
                        source: format!("explicit-label-line-{}", i + 1),
                    });
                }
            }
        }

        if is_plausible_name(line) {
            candidates.push(NameCandidate {
                text: clean_name(line),
                score: POSITION_SCORES[i],
                confidence: 0.7 - 0.1 * i as f32,
                source: format!("position-line-{}", i + 1),
            });
        }
    }

    candidates
}

/// Email-prefix analysis: the local part respelled three ways.
pub(super) fn email_prefix_pass(email: &str) -> Vec<NameCandidate> {
    let local = email.split('@').next().unwrap_or("");

    let variants = [
        separators_to_spaces(local),
        CAMEL_BOUNDARY_RE.replace_all(local, "$1 $2").into_owned(),
        separators_to_spaces(&strip_digits(local)),
    ];

    let mut candidates = Vec::new();
    for variant in variants {
        let cleaned = clean_name(&variant);
        if is_plausible_name(&cleaned) {
            candidates.push(NameCandidate {
                text: cleaned,
                score: EMAIL_SCORE,
                confidence: EMAIL_CONFIDENCE,
                source: "email-prefix-analysis".to_string(),
            });
        }
    }
    candidates
}

/// Indentation pattern analysis: deeply indented (visually centered)
/// name-shaped lines near the top of the document.
pub(super) fn indentation_pass(raw_lines: &[&str]) -> Vec<NameCandidate> {
    let mut candidates = Vec::new();

    for (i, line) in raw_lines.iter().take(INDENT_SCAN_LINES).enumerate() {
        let trimmed = line.trim();
        let leading = line.chars().count() - line.trim_start().chars().count();

        if leading > INDENT_MIN_LEADING
            && is_plausible_name(trimmed)
            && !contains_resume_keyword(trimmed)
        {
            candidates.push(NameCandidate {
                text: clean_name(trimmed),
                score: INDENT_BASE_SCORE - (i / 2) as f32,
                confidence: INDENT_CONFIDENCE,
                source: format!("centered-text-line-{}", i + 1),
            });
        }
    }

    candidates
}

fn separators_to_spaces(s: &str) -> String {
    s.chars()
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .collect()
}

fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}
