// Humanizer
// Single-pass formal → informal substitution with edit spans in original-text coordinates.
//
// All dictionary entries are matched against the untouched input in one scan.
// Longer phrases are tried first at any position, matches never overlap, and
// the output text is rebuilt from the match list. Edit offsets are character
// indices into the input, so they stay valid no matter how many rules fire.

use super::lexicon::{phrase_pattern, HUMANIZE_DICTIONARY};
use crate::models::EditRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HumanizedText {
    pub text: String,
    pub changes: Vec<EditRecord>,
}

struct Dictionary {
    matcher: Regex,
    replacements: HashMap<String, &'static str>,
}

fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn dictionary() -> &'static Dictionary {
    static DICT: OnceLock<Dictionary> = OnceLock::new();
    DICT.get_or_init(|| {
        let mut entries: Vec<&(&str, &str)> = HUMANIZE_DICTIONARY.iter().collect();
        // Leftmost-first alternation: put longer phrases first so they win at the same start.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        let alternation = entries
            .iter()
            .map(|(from, _)| phrase_pattern(from))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("humanizer regex");
        let replacements = HUMANIZE_DICTIONARY
            .iter()
            .map(|(from, to)| (normalize_key(from), *to))
            .collect();
        Dictionary { matcher, replacements }
    })
}

/// Capitalize the replacement when the matched text starts with an uppercase letter.
fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rewrite `text` with informal equivalents. Deterministic and total.
pub fn humanize_text(text: &str) -> HumanizedText {
    let dict = dictionary();
    let mut out = String::with_capacity(text.len());
    let mut changes = Vec::new();
    let mut last_byte = 0usize;
    let mut char_cursor = 0usize;

    for m in dict.matcher.find_iter(text) {
        let Some(base) = dict.replacements.get(&normalize_key(m.as_str())) else {
            continue;
        };
        let gap = &text[last_byte..m.start()];
        out.push_str(gap);
        char_cursor += gap.chars().count();

        let matched = m.as_str();
        let replacement = match_case(matched, base);
        let start_index = char_cursor;
        let end_index = start_index + matched.chars().count();
        out.push_str(&replacement);

        changes.push(EditRecord {
            original: matched.to_string(),
            replacement,
            start_index,
            end_index,
        });
        char_cursor = end_index;
        last_byte = m.end();
    }
    out.push_str(&text[last_byte..]);

    // Matches come out in scan order; keep the ordering explicit for callers.
    changes.sort_by_key(|c| c.start_index);
    HumanizedText { text: out, changes }
}
