// Lexicons
// Curated phrase tables used as scoring signals and as the humanizer dictionary.
// Weights and caps are fixed calibration constants.

use regex::Regex;
use std::sync::OnceLock;

/// A weighted phrase list, matched case-insensitively. Whole-word lists only
/// count hits on word boundaries; the others count every occurrence, including
/// inside longer words.
#[derive(Debug)]
pub struct Lexicon {
    pub weight: f64,
    pub cap: f64,
    patterns: Vec<Regex>,
}

impl Lexicon {
    fn compile(weight: f64, cap: f64, whole_word: bool, phrases: &[&str]) -> Self {
        let patterns = phrases
            .iter()
            .map(|p| {
                let source = if whole_word {
                    format!(r"(?i)\b{}\b", phrase_pattern(p))
                } else {
                    format!("(?i){}", phrase_pattern(p))
                };
                Regex::new(&source).expect("lexicon regex")
            })
            .collect();
        Self { weight, cap, patterns }
    }

    /// Total occurrences summed over every phrase (phrases are counted independently).
    pub fn hits(&self, text: &str) -> usize {
        self.patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    /// `min(hits * weight, cap)`
    pub fn contribution(&self, text: &str) -> f64 {
        (self.hits(text) as f64 * self.weight).min(self.cap)
    }
}

/// Regex source for a literal phrase: words joined by `\s+`, straight and curly apostrophes accepted.
pub(crate) fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|w| regex::escape(w).replace('\'', "['’]"))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

const REPETITIVE_PHRASES: &[&str] = &[
    "furthermore", "moreover", "additionally", "in addition", "consequently",
    "therefore", "thus", "hence", "as a result", "subsequently",
    "it is important to note", "it should be noted", "it is worth mentioning",
    "in conclusion", "to summarize", "in summary",
];

const FORMAL_WORDS: &[&str] = &[
    "utilize", "implement", "facilitate", "commence", "terminate", "endeavor",
    "subsequently", "consequently", "furthermore", "moreover", "nevertheless",
    "approximately", "substantial", "utilization", "implementation", "facilitation",
    "leverage", "comprehensive", "paramount", "aforementioned", "optimal", "demonstrate",
];

const COMPLEX_STRUCTURES: &[&str] = &[
    "in order to", "with the aim of", "for the purpose of", "with respect to",
    "in terms of", "in the context of", "in light of", "with regard to",
    "it is essential to", "due to the fact that", "in the event that",
];

const AI_PATTERNS: &[&str] = &[
    "let me explain", "here are some", "here is a", "i hope this helps",
    "feel free to", "it's worth noting", "let's dive into", "delve into",
    "in today's world", "as an ai", "great question", "i'd be happy to",
];

const TECHNICAL_JARGON: &[&str] = &[
    "algorithm", "framework", "methodology", "paradigm", "infrastructure",
    "optimization", "scalability", "integration", "synergy", "ecosystem",
    "robust", "seamless", "innovative", "cutting-edge", "data-driven",
    "holistic", "stakeholder", "deployment",
];

/// Formal term → informal replacement. Multi-word phrases take priority over
/// single words when they start at the same position.
pub const HUMANIZE_DICTIONARY: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "use"),
    ("facilitate", "help"),
    ("commence", "start"),
    ("terminate", "end"),
    ("endeavor", "try"),
    ("subsequently", "then"),
    ("consequently", "so"),
    ("furthermore", "also"),
    ("moreover", "also"),
    ("additionally", "also"),
    ("nevertheless", "but"),
    ("approximately", "about"),
    ("substantial", "large"),
    ("utilization", "use"),
    ("implementation", "use"),
    ("facilitation", "help"),
    ("comprehensive", "complete"),
    ("leverage", "use"),
    ("demonstrate", "show"),
    ("numerous", "many"),
    ("obtain", "get"),
    ("sufficient", "enough"),
    ("very", "quite"),
    ("extremely", "quite"),
    ("highly", "quite"),
    ("in order to", "to"),
    ("with the aim of", "to"),
    ("for the purpose of", "to"),
    ("with respect to", "about"),
    ("in terms of", "in"),
    ("in the context of", "in"),
    ("in light of", "given"),
    ("with regard to", "about"),
    ("due to the fact that", "because"),
];

pub struct Lexicons {
    pub repetitive: Lexicon,
    pub formal: Lexicon,
    pub complex: Lexicon,
    pub ai_patterns: Lexicon,
    pub jargon: Lexicon,
}

/// Process-wide lexicon tables, compiled on first use.
pub fn lexicons() -> &'static Lexicons {
    static LEXICONS: OnceLock<Lexicons> = OnceLock::new();
    LEXICONS.get_or_init(|| Lexicons {
        repetitive: Lexicon::compile(6.0, 30.0, false, REPETITIVE_PHRASES),
        formal: Lexicon::compile(3.0, 25.0, true, FORMAL_WORDS),
        complex: Lexicon::compile(5.0, 20.0, false, COMPLEX_STRUCTURES),
        ai_patterns: Lexicon::compile(8.0, 25.0, true, AI_PATTERNS),
        jargon: Lexicon::compile(2.0, 20.0, true, TECHNICAL_JARGON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_hits_are_case_insensitive_and_whole_word() {
        let lex = lexicons();
        assert_eq!(lex.formal.hits("We UTILIZE tools; Utilize them. utilized"), 2);
    }

    #[test]
    fn test_transitional_and_complex_hits_count_inside_words() {
        let lex = lexicons();
        assert_eq!(lex.repetitive.hits("Such enthusiasm henceforth, and in addition"), 3);
        assert_eq!(lex.repetitive.contribution("Such enthusiasm henceforth, and in addition"), 18.0);
        assert_eq!(lex.complex.hits("within terms offered, in order tomorrow"), 2);
        assert_eq!(lex.complex.hits("Plain words today"), 0);
    }

    #[test]
    fn test_contribution_is_capped() {
        let lex = lexicons();
        let text = "furthermore ".repeat(10);
        assert_eq!(lex.repetitive.hits(&text), 10);
        assert_eq!(lex.repetitive.contribution(&text), 30.0);
    }

    #[test]
    fn test_phrases_span_any_whitespace_and_apostrophes() {
        let lex = lexicons();
        assert_eq!(lex.complex.hits("in  order\nto win"), 1);
        assert!(lex.ai_patterns.contains_any("It’s worth noting that"));
    }

    #[test]
    fn test_dictionary_keys_are_unique() {
        let mut keys: Vec<&str> = HUMANIZE_DICTIONARY.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }
}
