// Text Tools
// Case conversion, whitespace cleanup, counting, summarizing and sorting

use super::text_processor::{char_len, count_words, split_paragraphs, split_sentences};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

const READING_WPM: usize = 200;
const SPEAKING_WPM: usize = 150;
const TOP_WORDS: usize = 10;

fn word_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w").expect("word start regex"))
}

fn sentence_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w|\.\s+\w").expect("sentence start regex"))
}

fn whitespace_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("blank lines regex"))
}

fn line_start_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s+").expect("line start regex"))
}

fn line_end_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)\s+$").expect("line end regex"))
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("token regex"))
}

// ============ Case Conversion ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    #[serde(alias = "uppercase")]
    Upper,
    #[serde(alias = "lowercase")]
    Lower,
    Sentence,
    Title,
    Camel,
    Snake,
    Kebab,
    Alternating,
}

fn upper_match(caps: &Captures) -> String {
    caps[0].to_uppercase()
}

pub fn convert_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Sentence => sentence_start_re()
            .replace_all(&text.to_lowercase(), upper_match)
            .into_owned(),
        CaseStyle::Title => word_start_re()
            .replace_all(&text.to_lowercase(), upper_match)
            .into_owned(),
        CaseStyle::Camel => {
            let lower = text.to_lowercase();
            // The very first character keeps its lowercase form.
            let titled = word_start_re().replace_all(&lower, |caps: &Captures| match caps.get(0) {
                Some(m) if m.start() > 0 => m.as_str().to_uppercase(),
                Some(m) => m.as_str().to_string(),
                None => String::new(),
            });
            whitespace_run_re().replace_all(&titled, "").into_owned()
        }
        CaseStyle::Snake => whitespace_run_re()
            .replace_all(&text.to_lowercase(), "_")
            .into_owned(),
        CaseStyle::Kebab => whitespace_run_re()
            .replace_all(&text.to_lowercase(), "-")
            .into_owned(),
        CaseStyle::Alternating => text
            .chars()
            .enumerate()
            .flat_map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_lowercase().collect::<Vec<_>>()
                } else {
                    c.to_uppercase().collect::<Vec<_>>()
                }
            })
            .collect(),
    }
}

// ============ Whitespace Cleanup ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    All,
    Extra,
    Lines,
    Tabs,
    Start,
    End,
    Both,
    Normalize,
}

pub fn clean_whitespace(text: &str, mode: WhitespaceMode) -> String {
    match mode {
        WhitespaceMode::All => whitespace_run_re().replace_all(text, "").into_owned(),
        WhitespaceMode::Extra | WhitespaceMode::Normalize => {
            whitespace_run_re().replace_all(text, " ").trim().to_string()
        }
        WhitespaceMode::Lines => blank_lines_re().replace_all(text, "\n").trim().to_string(),
        WhitespaceMode::Tabs => text.replace('\t', "    "),
        WhitespaceMode::Start => line_start_ws_re().replace_all(text, "").into_owned(),
        WhitespaceMode::End => line_end_ws_re().replace_all(text, "").into_owned(),
        WhitespaceMode::Both => {
            let stripped = line_start_ws_re().replace_all(text, "");
            line_end_ws_re().replace_all(&stripped, "").into_owned()
        }
    }
}

// ============ Counter ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_minutes: usize,
    pub speaking_time_minutes: usize,
    pub top_words: Vec<WordCount>,
}

fn word_frequency(text: &str) -> Vec<WordCount> {
    let lower = text.to_lowercase();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in token_re().find_iter(&lower) {
        if m.as_str().chars().count() > 2 {
            *freq.entry(m.as_str()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<WordCount> = freq
        .into_iter()
        .map(|(word, count)| WordCount { word: word.to_string(), count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    counts.truncate(TOP_WORDS);
    counts
}

pub fn text_stats(text: &str) -> TextStats {
    let words = count_words(text);
    let blank = text.trim().is_empty();
    TextStats {
        characters: char_len(text),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences: if blank { 0 } else { split_sentences(text).len() },
        paragraphs: if blank { 0 } else { split_paragraphs(text).len() },
        reading_time_minutes: words.div_ceil(READING_WPM),
        speaking_time_minutes: words.div_ceil(SPEAKING_WPM),
        top_words: word_frequency(text),
    }
}

// ============ Summarizer ============

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Short,
    Medium,
    Long,
    Bullet,
    Extract,
}

/// Extractive summary: leading sentences, bullets, or long key words.
pub fn summarize(text: &str, style: SummaryStyle) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let sentences = split_sentences(text);
    let lead = |n: usize| format!("{}.", sentences[..n.min(sentences.len())].join(". "));

    match style {
        SummaryStyle::Short => lead(3),
        SummaryStyle::Medium => lead(5),
        SummaryStyle::Long => lead(8),
        SummaryStyle::Bullet => sentences
            .iter()
            .take(6)
            .map(|s| format!("• {}", s))
            .collect::<Vec<_>>()
            .join("\n"),
        SummaryStyle::Extract => text
            .split_whitespace()
            .filter(|w| w.chars().count() > 5)
            .take(10)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

// ============ Sorter ============

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    Numerical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub descending: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub unique: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::Alphabetical,
            descending: false,
            separator: default_separator(),
            unique: false,
        }
    }
}

fn default_separator() -> String {
    "\n".to_string()
}

fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Numbers first (by value), then everything else alphabetically.
fn numerical(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => alphabetical(a, b),
    }
}

pub fn sort_lines(text: &str, options: &SortOptions) -> String {
    let separator = if options.separator.is_empty() {
        "\n"
    } else {
        options.separator.as_str()
    };
    let mut items: Vec<&str> = text
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match options.order {
        SortOrder::Alphabetical => items.sort_by(|a, b| alphabetical(a, b)),
        SortOrder::Numerical => items.sort_by(|a, b| numerical(a, b)),
    }
    if options.unique {
        items.dedup();
    }
    if options.descending {
        items.reverse();
    }
    items.join(separator)
}
