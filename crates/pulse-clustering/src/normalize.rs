//! Deterministic text cleanup prior to feature extraction.
//!
//! Normalized text never reaches the generator or the stored samples; it
//! exists only to feed the vectorizer.

use regex::Regex;
use std::sync::LazyLock;

/// Markup tags of the form `<...>`.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Normalize text for vectorization: lowercase, strip markup tags, then
/// drop every character outside `[a-z0-9 ]`. Pure and deterministic; empty
/// input yields empty output.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = MARKUP_RE.replace_all(&lowered, "");
    stripped
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(normalize("WiFi Is SLOW"), "wifi is slow");
    }

    #[test]
    fn strips_markup_tags() {
        assert_eq!(normalize("<b>broken</b> AC unit"), "broken ac unit");
    }

    #[test]
    fn drops_special_characters() {
        assert_eq!(normalize("food's bad!!! (really)"), "foods bad really");
    }

    #[test]
    fn empty_input_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert_eq!(normalize("?!... ---"), " ");
        assert_eq!(normalize("#@$%"), "");
    }

    #[test]
    fn keeps_digits_and_spaces() {
        assert_eq!(normalize("Room 204 has 0 chairs"), "room 204 has 0 chairs");
    }

    #[test]
    fn deterministic() {
        let input = "The <i>Wi-Fi</i> in Hostel-7 is DOWN!";
        assert_eq!(normalize(input), normalize(input));
    }
}
