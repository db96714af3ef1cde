// Text Processing Service
// Shared tokenization used by the scorer, the humanizer and the text tools

use regex::Regex;
use std::sync::OnceLock;

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence regex"))
}

fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph regex"))
}

/// Length in characters (Unicode scalar values), the unit used for all limits and offsets.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split on runs of `.`, `!` and `?`, keeping trimmed non-empty pieces.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_end_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-separated token count; blank text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Paragraphs separated by one or more blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_break_re()
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}
