//! Name-shape validation and cleaning.
//!
//! Every pass runs proposed text through the same two gates: the shape
//! check decides whether a string can plausibly be a person's name, and
//! the cleaner normalizes it into the form candidates carry.

/// Total length bounds on a trimmed candidate.
const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 60;

/// Word-count bounds on a candidate.
const MIN_WORDS: usize = 2;
const MAX_WORDS: usize = 6;

const MAX_WORD_LEN: usize = 30;

/// Characters a name word may contain besides letters.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '.' | '\'' | '\u{2019}' | '-')
}

/// Characters retained (rather than blanked) by [`clean_name`].
fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '.' | '\'' | '\u{2019}' | '-')
}

/// Whether `text` passes name-shape validation.
///
/// Trimmed length 2–60, 2–6 whitespace-separated words, each word at
/// most 30 chars of letters/period/apostrophe/hyphen, first word
/// starting with a letter. Digits and other punctuation are rejected
/// outright.
pub fn is_plausible_name(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.len() < MIN_NAME_LEN || trimmed.len() > MAX_NAME_LEN {
        return false;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() < MIN_WORDS || words.len() > MAX_WORDS {
        return false;
    }

    for word in &words {
        if word.len() > MAX_WORD_LEN || !word.chars().all(is_name_char) {
            return false;
        }
    }

    words[0]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Normalize a raw candidate string: blank everything but letters,
/// whitespace, periods, apostrophes and hyphens, collapse whitespace,
/// and title-case each word (apostrophe-joined segments cased
/// independently, so `o'connor` becomes `O'Connor`).
pub fn clean_name(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .map(|c| if is_kept_char(c) { c } else { ' ' })
        .collect();

    filtered
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    if word.contains('\'') {
        word.split('\'')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join("'")
    } else {
        capitalize(word)
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        assert!(is_plausible_name("John Smith"));
        assert!(is_plausible_name("Mary-Jane O'Brien"));
        assert!(is_plausible_name("Jean-Claude van der Berg"));
    }

    #[test]
    fn accepts_middle_initial_with_period() {
        assert!(is_plausible_name("Jane A. Doe"));
    }

    #[test]
    fn rejects_single_word() {
        assert!(!is_plausible_name("Madonna"));
    }

    #[test]
    fn rejects_too_many_words() {
        assert!(!is_plausible_name("one two three four five six seven"));
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert!(!is_plausible_name("John Smith99"));
        assert!(!is_plausible_name("John @Smith"));
        assert!(!is_plausible_name("john.smith@email.com x"));
    }

    #[test]
    fn rejects_trailing_punctuation_in_word() {
        assert!(!is_plausible_name("Smith, John"));
    }

    #[test]
    fn rejects_length_extremes() {
        assert!(!is_plausible_name("a"));
        let long = "Averyveryverylongfirstnameindeed Andanevenlongerlastnamethanthat";
        assert!(!is_plausible_name(long));
    }

    #[test]
    fn first_word_must_start_with_letter() {
        assert!(!is_plausible_name("'Ana Maria"));
        assert!(!is_plausible_name("-John Smith"));
    }

    #[test]
    fn clean_title_cases_words() {
        assert_eq!(clean_name("JOHN SMITH"), "John Smith");
        assert_eq!(clean_name("jane doe"), "Jane Doe");
    }

    #[test]
    fn clean_handles_apostrophe_segments() {
        assert_eq!(clean_name("patrick o'connor"), "Patrick O'Connor");
    }

    #[test]
    fn clean_blanks_stray_characters() {
        assert_eq!(clean_name("John * Smith!"), "John Smith");
        assert_eq!(clean_name("jo4hn smith"), "Jo Hn Smith");
    }

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean_name("  John\t  Smith "), "John Smith");
    }

    #[test]
    fn clean_keeps_periods_and_hyphens() {
        assert_eq!(clean_name("jane a. doe"), "Jane A. Doe");
        assert_eq!(clean_name("mary-jane kelly"), "Mary-jane Kelly");
    }
}
